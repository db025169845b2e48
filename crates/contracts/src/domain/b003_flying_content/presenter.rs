//! Overlay state machine.
//!
//! ```text
//! Closed --open--> Opening --entered--> Open --close--> Closing --exited--> Closed
//! ```
//!
//! `open` while `Opening`/`Open` swaps the content in place. `open` while `Closing` starts
//! a fresh entrance; the exit completion that is still pending is then stale and ignored,
//! which is what the generation counter is for.

use super::catalog::ContentTable;
use super::content::OverlayContent;
use crate::shared::animation::{AnimTarget, AnimationEngine, Ease, Props, Tween};
use crate::shared::config::TimingConfig;
use crate::shared::schedule::{Deferred, Scheduled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

fn entrance_from() -> Props {
    Props::new().scale(0.5).x_percent(200.0).y_percent(-50.0).opacity(0.0)
}

fn entrance_to() -> Props {
    Props::new().scale(1.0).x_percent(0.0).y_percent(-50.0).opacity(1.0)
}

fn exit_to() -> Props {
    Props::new().scale(0.5).x_percent(-200.0).opacity(0.0)
}

#[derive(Debug, Clone)]
pub struct OverlayPresenter {
    phase: OverlayPhase,
    content: Option<OverlayContent>,
    generation: u64,
    timing: TimingConfig,
}

impl OverlayPresenter {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            phase: OverlayPhase::Closed,
            content: None,
            generation: 0,
            timing,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether the overlay is on the interactive surface.
    pub fn is_active(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    pub fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }

    /// Show the entry `key` of `table`. Unknown keys change nothing.
    pub fn open(
        &mut self,
        key: &str,
        table: &ContentTable,
        engine: &dyn AnimationEngine,
    ) -> Option<Scheduled> {
        let Some(content) = table.get(key) else {
            log::debug!("overlay: no `{key}` in table {}", table.id().name());
            return None;
        };
        self.content = Some(content.clone());

        match self.phase {
            OverlayPhase::Opening | OverlayPhase::Open => None,
            OverlayPhase::Closed | OverlayPhase::Closing => {
                self.phase = OverlayPhase::Opening;
                self.generation += 1;
                engine.set(AnimTarget::FlyingContent, &entrance_from());
                engine.tween(
                    AnimTarget::FlyingContent,
                    &entrance_to(),
                    Tween::new(self.timing.overlay_enter_ms, Ease::BackOut),
                );
                Some(Scheduled::after(
                    self.timing.overlay_enter_ms,
                    Deferred::OverlayEntered {
                        generation: self.generation,
                    },
                ))
            }
        }
    }

    pub fn close(&mut self, engine: &dyn AnimationEngine) -> Option<Scheduled> {
        match self.phase {
            OverlayPhase::Closed | OverlayPhase::Closing => None,
            OverlayPhase::Opening | OverlayPhase::Open => {
                self.phase = OverlayPhase::Closing;
                self.generation += 1;
                engine.tween(
                    AnimTarget::FlyingContent,
                    &exit_to(),
                    Tween::new(self.timing.overlay_exit_ms, Ease::BackIn),
                );
                Some(Scheduled::after(
                    self.timing.overlay_exit_ms,
                    Deferred::OverlayExited {
                        generation: self.generation,
                    },
                ))
            }
        }
    }

    pub fn on_entered(&mut self, generation: u64) {
        if generation == self.generation && self.phase == OverlayPhase::Opening {
            self.phase = OverlayPhase::Open;
        }
    }

    pub fn on_exited(&mut self, generation: u64) {
        if generation == self.generation && self.phase == OverlayPhase::Closing {
            self.phase = OverlayPhase::Closed;
        }
    }

    /// Glossary entry `index` was picked: close first, navigate once the exit is over.
    pub fn select_glossary_entry(
        &mut self,
        index: usize,
        engine: &dyn AnimationEngine,
    ) -> Vec<Scheduled> {
        let Some(target) = self
            .content
            .as_ref()
            .and_then(|c| c.glossary_target(index))
            .cloned()
        else {
            return Vec::new();
        };

        let mut scheduled: Vec<Scheduled> = self.close(engine).into_iter().collect();
        scheduled.push(Scheduled::after(
            self.timing.glossary_navigate_delay_ms,
            Deferred::NavigateToPage(target),
        ));
        scheduled
    }
}

//! The animation capability the book depends on.
//!
//! The engine is an opaque collaborator: the core only says which element should end up
//! with which properties, over what duration and scroll range. Completion is not reported
//! through the engine; callers schedule the follow-up themselves (see [`super::schedule`]).

use serde::Serialize;

/// What a request is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTarget {
    /// A page of the registry, by array index.
    Page(usize),
    /// The whole book container.
    Book,
    /// The flying content panel inside the overlay.
    FlyingContent,
}

/// Animatable properties. `None` leaves the property untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotate_y(mut self, value: f64) -> Self {
        self.rotate_y = Some(value);
        self
    }

    pub fn z(mut self, value: f64) -> Self {
        self.z = Some(value);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn x_percent(mut self, value: f64) -> Self {
        self.x_percent = Some(value);
        self
    }

    pub fn y_percent(mut self, value: f64) -> Self {
        self.y_percent = Some(value);
        self
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2InOut,
    BackOut,
    BackIn,
}

impl Ease {
    /// Ease name as understood by GSAP.
    pub fn as_gsap(&self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power2InOut => "power2.inOut",
            Ease::BackOut => "back.out(1.7)",
            Ease::BackIn => "back.in(1.7)",
        }
    }
}

/// Time-based interpolation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    pub duration_ms: u32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(duration_ms: u32, ease: Ease) -> Self {
        Self { duration_ms, ease }
    }
}

/// "While the user scrolls from `start` to `end`, move the properties to their targets."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
    /// Smoothing lag in seconds, `None` ties the properties directly to the scrollbar.
    pub scrub: Option<f64>,
}

pub trait AnimationEngine {
    /// Assign properties immediately.
    fn set(&self, target: AnimTarget, props: &Props);

    /// Interpolate to `props` over time.
    fn tween(&self, target: AnimTarget, props: &Props, tween: Tween);

    /// Interpolate to `props` as the scroll position crosses `range`.
    fn bind_to_scroll(&self, target: AnimTarget, props: &Props, range: ScrollRange);

    /// Drop every binding created by [`AnimationEngine::bind_to_scroll`].
    fn clear_scroll_bindings(&self);

    /// Recompute scroll-bound positions after a layout change.
    fn refresh(&self);

    /// Smoothly scroll the window to `offset` pixels.
    fn scroll_to(&self, offset: f64, tween: Tween);

    /// Pause or resume every running animation.
    fn set_paused(&self, paused: bool);
}

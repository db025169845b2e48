//! Keeps the interaction mode in line with the viewport width.

/// `mobile = width <= breakpoint`, evaluated at load and on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveSwitch {
    breakpoint_px: f64,
    mobile: bool,
}

impl ResponsiveSwitch {
    pub fn new(breakpoint_px: f64, initial_width: f64) -> Self {
        Self {
            breakpoint_px,
            mobile: initial_width <= breakpoint_px,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Record a new width. Returns the new mode only when it flipped.
    pub fn observe(&mut self, width: f64) -> Option<bool> {
        let mobile = width <= self.breakpoint_px;
        if mobile == self.mobile {
            return None;
        }
        self.mobile = mobile;
        Some(mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(ResponsiveSwitch::new(768.0, 768.0).is_mobile());
        assert!(!ResponsiveSwitch::new(768.0, 769.0).is_mobile());
    }

    #[test]
    fn test_observe_reports_only_flips() {
        let mut switch = ResponsiveSwitch::new(768.0, 1280.0);
        assert_eq!(switch.observe(1024.0), None);
        assert_eq!(switch.observe(700.0), Some(true));
        assert_eq!(switch.observe(360.0), None);
        assert_eq!(switch.observe(900.0), Some(false));
        assert!(!switch.is_mobile());
    }
}

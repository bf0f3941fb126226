//! Reveal options and per-item transition styles.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN_PX: i32 = 50;
pub const DEFAULT_STAGGER_DELAY_MS: u32 = 50;
pub const DEFAULT_DURATION_MS: u32 = 500;
pub const TIMING_FUNCTION: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
pub const WILL_CHANGE: &str = "transform, opacity";

const TRANSITION_CLASSES: &str = "transition-all transform";
const REVEALED_CLASSES: &str = "translate-y-0 opacity-100 scale-100";
const HIDDEN_CLASSES: &str = "translate-y-8 opacity-0 scale-95";

#[derive(Debug, Clone, PartialEq)]
pub enum RevealConfigError {
    /// Threshold is NaN/infinite or outside `[0, 1]`.
    InvalidThreshold(f64),
}

impl Display for RevealConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidThreshold(value) => {
                write!(f, "reveal threshold must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for RevealConfigError {}

/// Observation and animation settings for one revealed container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction of the container that counts as intersecting.
    pub threshold: f64,
    /// Margin grown around the viewport before intersection is tested.
    pub root_margin_px: i32,
    pub stagger_delay_ms: u32,
    pub duration_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
            stagger_delay_ms: DEFAULT_STAGGER_DELAY_MS,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl RevealOptions {
    pub fn validate(&self) -> Result<(), RevealConfigError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(RevealConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Root margin in CSS shorthand, e.g. `50px`.
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Transition settings for the item at one list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyle {
    pub transition_delay_ms: u64,
    pub transition_duration_ms: u32,
    pub timing_function: &'static str,
    pub will_change: &'static str,
}

impl ItemStyle {
    /// Inline CSS declarations for this item.
    pub fn to_css(&self) -> String {
        format!(
            "transition-delay: {}ms; transition-duration: {}ms; transition-timing-function: {}; will-change: {};",
            self.transition_delay_ms, self.transition_duration_ms, self.timing_function, self.will_change
        )
    }
}

/// Style of item `index`; delay grows linearly with the index.
pub fn style_for_index(options: &RevealOptions, index: usize) -> ItemStyle {
    ItemStyle {
        transition_delay_ms: index as u64 * u64::from(options.stagger_delay_ms),
        transition_duration_ms: options.duration_ms,
        timing_function: TIMING_FUNCTION,
        will_change: WILL_CHANGE,
    }
}

/// `base` followed by the transition classes for the given visibility.
pub fn class_name(base: &str, revealed: bool) -> String {
    let state = if revealed {
        REVEALED_CLASSES
    } else {
        HIDDEN_CLASSES
    };
    format!("{base} {TRANSITION_CLASSES} {state}")
}

#[cfg(test)]
mod tests {
    use super::{class_name, style_for_index, RevealConfigError, RevealOptions};

    #[test]
    fn delay_is_index_times_stagger() {
        let options = RevealOptions::default();
        assert_eq!(style_for_index(&options, 0).transition_delay_ms, 0);
        assert_eq!(style_for_index(&options, 7).transition_delay_ms, 350);
        assert_eq!(style_for_index(&options, 7).transition_duration_ms, 500);

        let slow = RevealOptions {
            stagger_delay_ms: 120,
            duration_ms: 600,
            ..RevealOptions::default()
        };
        let style = style_for_index(&slow, 3);
        assert_eq!(style.transition_delay_ms, 360);
        assert!(style.to_css().starts_with("transition-delay: 360ms; transition-duration: 600ms;"));
    }

    #[test]
    fn class_name_is_binary_on_visibility() {
        assert_eq!(
            class_name("card", true),
            "card transition-all transform translate-y-0 opacity-100 scale-100"
        );
        assert_eq!(
            class_name("card", false),
            "card transition-all transform translate-y-8 opacity-0 scale-95"
        );
    }

    #[test]
    fn threshold_outside_unit_range_is_rejected() {
        assert!(RevealOptions::default().validate().is_ok());
        let bad = RevealOptions {
            threshold: 1.5,
            ..RevealOptions::default()
        };
        assert_eq!(bad.validate(), Err(RevealConfigError::InvalidThreshold(1.5)));
        let nan = RevealOptions {
            threshold: f64::NAN,
            ..RevealOptions::default()
        };
        assert!(nan.validate().is_err());
        assert_eq!(RevealOptions::default().root_margin_css(), "50px");
    }
}

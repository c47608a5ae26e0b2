#![forbid(unsafe_code)]

//! Sortable list configuration.

use std::fmt;

use relist_core::event::PointerButton;

/// Distance (surface units) a dragged item's bottom edge must pass a
/// sibling's bottom edge before the placeholder swaps with it.
pub const DEFAULT_PROXIMITY_THRESHOLD: i32 = 5;

/// Behaviour knobs for [`SortableList`](crate::sortable_list::SortableList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortableListConfig {
    /// Swap threshold against sibling bottom edges. Must be non-negative.
    pub proximity_threshold: i32,
    /// Extra vertical offset applied to the dragged item under the pointer.
    pub drag_offset_y: i32,
    /// Button that may start a drag or press a delete handle.
    pub activation_button: PointerButton,
    /// Escape aborts an active drag and restores the original slot.
    pub cancel_on_escape: bool,
    /// Host focus loss aborts an active drag.
    pub cancel_on_focus_loss: bool,
}

impl Default for SortableListConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            drag_offset_y: 0,
            activation_button: PointerButton::Primary,
            cancel_on_escape: true,
            cancel_on_focus_loss: true,
        }
    }
}

impl SortableListConfig {
    /// Check field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.proximity_threshold < 0 {
            return Err(ConfigError::NegativeThreshold {
                threshold: self.proximity_threshold,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_proximity_threshold(mut self, threshold: i32) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_drag_offset_y(mut self, offset: i32) -> Self {
        self.drag_offset_y = offset;
        self
    }

    #[must_use]
    pub const fn with_activation_button(mut self, button: PointerButton) -> Self {
        self.activation_button = button;
        self
    }

    #[must_use]
    pub const fn with_cancel_on_escape(mut self, enabled: bool) -> Self {
        self.cancel_on_escape = enabled;
        self
    }

    #[must_use]
    pub const fn with_cancel_on_focus_loss(mut self, enabled: bool) -> Self {
        self.cancel_on_focus_loss = enabled;
        self
    }
}

/// Rejected configuration or construction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NegativeThreshold { threshold: i32 },
    InvalidRootWidth { width: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeThreshold { threshold } => {
                write!(f, "proximity threshold must be >= 0 (got {threshold})")
            }
            Self::InvalidRootWidth { width } => {
                write!(f, "list root width must be >= 0 (got {width})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

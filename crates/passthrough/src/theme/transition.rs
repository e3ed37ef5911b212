//! Shared overlay transition.

use crate::style::TransitionSpec;

/// Scale-and-fade transition used by every overlay panel in the preset.
pub static OVERLAY_TRANSITION: TransitionSpec = TransitionSpec {
    enter_from_class: "opacity-0 scale-75",
    enter_active_class: "transition-transform transition-opacity duration-150 ease-in",
    leave_active_class: "transition-opacity duration-150 ease-linear",
    leave_to_class: "opacity-0",
};

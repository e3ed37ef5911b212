//! Password field preset.

use super::inputtext::MUTED;
use super::transition::OVERLAY_TRANSITION;
use crate::class::ClassList;
use crate::options::{PassThroughOptions, Strength};
use crate::style::{PartStyle, StyleSpec};

const ICON: &[&str] = &["absolute top-1/2 -mt-2", "right-3 text-gray-600 dark:text-white/70"];

fn root(opts: &PassThroughOptions) -> ClassList {
    ClassList::new()
        .push("inline-flex relative")
        .when(opts.props.disabled, MUTED)
}

fn meter_label(opts: &PassThroughOptions) -> ClassList {
    let strength = opts.instance.strength();
    ClassList::new()
        .push("transition-width duration-1000 ease-in-out h-full")
        .when(strength == Some(Strength::Weak), "bg-red-500")
        .when(strength == Some(Strength::Medium), "bg-orange-500")
        .when(strength == Some(Strength::Strong), "bg-green-500")
        .when(opts.props.toggle_mask, "pr-[2.5rem]")
}

/// Pass-through styles for the password field.
///
/// `root` reads `props.disabled`; `meterlabel` colours the strength bar
/// from `instance.meter.strength` and leaves room for the mask toggle.
pub static PASSWORD: StyleSpec = StyleSpec::new(
    "password",
    &[
        ("root", PartStyle::Dynamic(root)),
        (
            "panel",
            PartStyle::Static("p-5 bg-white dark:bg-gray-900 text-gray-700 dark:text-white/80 shadow-md rounded-md"),
        ),
        ("meter", PartStyle::Static("mb-2 bg-gray-300 dark:bg-gray-700 h-3")),
        ("meterlabel", PartStyle::Dynamic(meter_label)),
        ("showicon", PartStyle::Classes(ICON)),
        ("hideicon", PartStyle::Classes(ICON)),
    ],
)
.with_transition(&OVERLAY_TRANSITION);

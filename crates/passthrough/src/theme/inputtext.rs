//! Text input preset.

use crate::class::ClassList;
use crate::options::{PassThroughOptions, Size};
use crate::style::{PartStyle, StyleSpec};

const BASE: &str = "font-sans text-gray-600 dark:text-white/80 bg-white dark:bg-gray-900 border border-gray-300 dark:border-blue-900/40 transition-colors duration-200 appearance-none rounded-lg";
const INTERACTIVE: &str = "hover:border-blue-500 focus:outline-none focus:outline-offset-0 focus:shadow-[0_0_0_0.2rem_rgba(191,219,254,1)] dark:focus:shadow-[0_0_0_0.2rem_rgba(147,197,253,0.5)]";
pub(crate) const MUTED: &str = "opacity-60 select-none pointer-events-none cursor-default";

const SIZE_LARGE: &str = "text-lg px-4 py-4";
const SIZE_SMALL: &str = "text-xs px-2 py-2";
const SIZE_DEFAULT: &str = "p-3 text-base";

fn root(opts: &PassThroughOptions) -> ClassList {
    let size = opts.props.size;
    ClassList::new()
        .push("m-0")
        .push(BASE)
        .when(!opts.context.disabled, INTERACTIVE)
        .when(opts.context.disabled, MUTED)
        .when(size == Some(Size::Large), SIZE_LARGE)
        .when(size == Some(Size::Small), SIZE_SMALL)
        .when(size.is_none(), SIZE_DEFAULT)
}

/// Pass-through styles for the text input.
///
/// The `root` part reads `context.disabled` and `props.size`.
pub static INPUT_TEXT: StyleSpec = StyleSpec::new(
    "inputtext",
    &[("root", PartStyle::Dynamic(root))],
);

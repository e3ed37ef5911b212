//! Menu preset.

use super::transition::OVERLAY_TRANSITION;
use crate::class::ClassList;
use crate::options::PassThroughOptions;
use crate::style::{PartStyle, StyleSpec};

const CONTENT_BASE: &str = "text-gray-700 dark:text-white/80 transition-shadow duration-200 rounded-none";
const CONTENT_HOVER: &str = "hover:text-gray-700 dark:hover:text-white/80 hover:bg-gray-200 dark:hover:bg-gray-800/80";
const CONTENT_FOCUSED: &str = "bg-gray-300 text-gray-700 dark:text-white/80 dark:bg-gray-800/90";

fn content(opts: &PassThroughOptions) -> ClassList {
    ClassList::new()
        .push(CONTENT_BASE)
        .push(CONTENT_HOVER)
        .when(opts.context.focused, CONTENT_FOCUSED)
}

/// Pass-through styles for the menu.
///
/// Only `content` is dynamic: the focused background is layered on top of
/// the hover classes when `context.focused` is set.
pub static MENU: StyleSpec = StyleSpec::new(
    "menu",
    &[
        (
            "root",
            PartStyle::Static("py-1 bg-white dark:bg-gray-900 text-gray-700 dark:text-white/80 border border-gray-300 dark:border-blue-900/40 rounded-md w-48"),
        ),
        ("menu", PartStyle::Classes(&["m-0 p-0 list-none", "outline-none"])),
        ("content", PartStyle::Dynamic(content)),
        (
            "action",
            PartStyle::Classes(&[
                "text-gray-700 dark:text-white/80 py-3 px-5 select-none",
                "cursor-pointer flex items-center no-underline overflow-hidden relative",
            ]),
        ),
        ("icon", PartStyle::Static("text-gray-600 dark:text-white/70 mr-2")),
        (
            "submenuheader",
            PartStyle::Classes(&["m-0 p-3 text-gray-700 dark:text-white/80 bg-white dark:bg-gray-900 font-bold rounded-tl-none rounded-tr-none"]),
        ),
    ],
)
.with_transition(&OVERLAY_TRANSITION);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_names() {
        let parts: Vec<_> = MENU.parts().collect();
        assert_eq!(
            parts,
            vec!["root", "menu", "content", "action", "icon", "submenuheader"]
        );
    }

    #[test]
    fn test_content_unfocused() {
        let class = MENU.resolve("content", &PassThroughOptions::default()).unwrap();
        assert_eq!(class, format!("{CONTENT_BASE} {CONTENT_HOVER}"));
    }

    #[test]
    fn test_content_focused_is_additive() {
        let opts = PassThroughOptions::new().focused(true);
        let class = MENU.resolve("content", &opts).unwrap();
        assert_eq!(
            class,
            format!("{CONTENT_BASE} {CONTENT_HOVER} {CONTENT_FOCUSED}")
        );
    }

    #[test]
    fn test_static_parts_ignore_options() {
        let busy = PassThroughOptions::new().focused(true).disabled(true);
        for part in ["root", "menu", "action", "icon", "submenuheader"] {
            assert_eq!(
                MENU.resolve(part, &busy),
                MENU.resolve(part, &PassThroughOptions::default())
            );
        }
    }

    #[test]
    fn test_menu_list_classes() {
        let class = MENU.resolve("menu", &PassThroughOptions::default()).unwrap();
        assert_eq!(class, "m-0 p-0 list-none outline-none");
    }

    #[test]
    fn test_uses_overlay_transition() {
        assert_eq!(MENU.transition(), Some(&OVERLAY_TRANSITION));
    }
}

//! Per-widget style tables.

use tracing::trace;

use super::error::StyleError;
use super::resolved::ResolvedPassThrough;
use super::transition::TransitionSpec;
use crate::class::ClassList;
use crate::options::PassThroughOptions;

/// A pure function computing a part's classes from render-time options.
pub type PartResolver = fn(&PassThroughOptions) -> ClassList;

/// How a single part's classes are produced.
#[derive(Debug, Clone, Copy)]
pub enum PartStyle {
    /// A literal class string.
    Static(&'static str),
    /// A literal `class` list with no conditions.
    Classes(&'static [&'static str]),
    /// Classes computed from the render-time options.
    Dynamic(PartResolver),
}

impl PartStyle {
    /// Returns the ordered class fragments for these options.
    pub fn classes(&self, opts: &PassThroughOptions) -> ClassList {
        match self {
            PartStyle::Static(class) => ClassList::new().push(*class),
            PartStyle::Classes(classes) => ClassList::new().extend(classes.iter().copied()),
            PartStyle::Dynamic(resolver) => resolver(opts),
        }
    }

    /// Resolves the part to its final class string.
    pub fn resolve(&self, opts: &PassThroughOptions) -> String {
        self.classes(opts).build()
    }

    /// Returns true if the part ignores the render-time options.
    pub fn is_static(&self) -> bool {
        !matches!(self, PartStyle::Dynamic(_))
    }
}

/// The pass-through style map of one widget.
///
/// Part names are fixed at declaration; specs are meant to live in `static`
/// items and are never modified.
///
/// # Example
///
/// ```rust
/// use passthrough::{ClassList, PartStyle, PassThroughOptions, StyleSpec};
///
/// static BADGE: StyleSpec = StyleSpec::new(
///     "badge",
///     &[
///         ("root", PartStyle::Dynamic(|opts| {
///             ClassList::new()
///                 .push("inline-flex")
///                 .when(opts.context.disabled, "opacity-60")
///         })),
///         ("label", PartStyle::Static("text-xs")),
///     ],
/// );
///
/// let opts = PassThroughOptions::new().disabled(true);
/// assert_eq!(BADGE.resolve("root", &opts).as_deref(), Some("inline-flex opacity-60"));
/// assert_eq!(BADGE.resolve("missing", &opts), None);
/// ```
#[derive(Debug)]
pub struct StyleSpec {
    name: &'static str,
    parts: &'static [(&'static str, PartStyle)],
    transition: Option<&'static TransitionSpec>,
}

impl StyleSpec {
    /// Declares a widget style map without a transition.
    pub const fn new(name: &'static str, parts: &'static [(&'static str, PartStyle)]) -> Self {
        Self {
            name,
            parts,
            transition: None,
        }
    }

    /// Attaches the overlay transition used by the widget.
    pub const fn with_transition(self, transition: &'static TransitionSpec) -> Self {
        Self {
            transition: Some(transition),
            ..self
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Part names in declaration order.
    pub fn parts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parts.iter().map(|(name, _)| *name)
    }

    pub fn transition(&self) -> Option<&'static TransitionSpec> {
        self.transition
    }

    /// Looks up a part by name.
    pub fn part(&self, name: &str) -> Option<&PartStyle> {
        self.parts
            .iter()
            .find(|(part, _)| *part == name)
            .map(|(_, style)| style)
    }

    /// Resolves a part, or `None` if the widget does not declare it.
    pub fn resolve(&self, part: &str, opts: &PassThroughOptions) -> Option<String> {
        self.part(part).map(|style| style.resolve(opts))
    }

    /// Resolves a part, reporting unknown part names as an error.
    pub fn try_resolve(&self, part: &str, opts: &PassThroughOptions) -> Result<String, StyleError> {
        trace!(widget = self.name, part, "resolving pass-through part");
        self.resolve(part, opts).ok_or_else(|| StyleError::UnknownPart {
            widget: self.name,
            part: part.to_string(),
            available: self.parts().collect(),
        })
    }

    /// Resolves every part along with the widget transition.
    pub fn resolve_all(&self, opts: &PassThroughOptions) -> ResolvedPassThrough {
        let parts = self
            .parts
            .iter()
            .map(|(name, style)| (*name, style.resolve(opts)))
            .collect();
        ResolvedPassThrough::new(self.name, parts, self.transition)
    }

    /// Checks that no part name is declared twice.
    pub fn validate(&self) -> Result<(), StyleError> {
        for (i, (name, _)) in self.parts.iter().enumerate() {
            if self.parts[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(StyleError::Duplicate {
                    owner: self.name.to_string(),
                    name: *name,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: TransitionSpec = TransitionSpec {
        enter_from_class: "opacity-0",
        enter_active_class: "transition-opacity",
        leave_active_class: "transition-opacity",
        leave_to_class: "opacity-0",
    };

    fn chip_root(opts: &PassThroughOptions) -> ClassList {
        ClassList::new()
            .push("chip")
            .when(opts.context.focused, "ring")
    }

    static CHIP: StyleSpec = StyleSpec::new(
        "chip",
        &[
            ("root", PartStyle::Dynamic(chip_root)),
            ("label", PartStyle::Static("text-sm")),
            ("icon", PartStyle::Classes(&["w-4 h-4", "ml-1"])),
        ],
    )
    .with_transition(&FADE);

    static TWICE: StyleSpec = StyleSpec::new(
        "twice",
        &[
            ("root", PartStyle::Static("a")),
            ("root", PartStyle::Static("b")),
        ],
    );

    #[test]
    fn test_parts_in_declaration_order() {
        let parts: Vec<_> = CHIP.parts().collect();
        assert_eq!(parts, vec!["root", "label", "icon"]);
    }

    #[test]
    fn test_resolve_static_and_classes() {
        let opts = PassThroughOptions::default();
        assert_eq!(CHIP.resolve("label", &opts).unwrap(), "text-sm");
        assert_eq!(CHIP.resolve("icon", &opts).unwrap(), "w-4 h-4 ml-1");
    }

    #[test]
    fn test_resolve_dynamic() {
        let focused = PassThroughOptions::new().focused(true);
        assert_eq!(CHIP.resolve("root", &focused).unwrap(), "chip ring");
        assert_eq!(
            CHIP.resolve("root", &PassThroughOptions::default()).unwrap(),
            "chip"
        );
    }

    #[test]
    fn test_resolve_unknown_part() {
        assert!(CHIP.resolve("badge", &PassThroughOptions::default()).is_none());
        let err = CHIP
            .try_resolve("badge", &PassThroughOptions::default())
            .unwrap_err();
        assert!(matches!(err, StyleError::UnknownPart { widget: "chip", .. }));
    }

    #[test]
    fn test_is_static() {
        assert!(CHIP.part("label").unwrap().is_static());
        assert!(CHIP.part("icon").unwrap().is_static());
        assert!(!CHIP.part("root").unwrap().is_static());
    }

    #[test]
    fn test_transition_attached() {
        assert_eq!(CHIP.transition(), Some(&FADE));
        assert_eq!(TWICE.transition(), None);
    }

    #[test]
    fn test_validate() {
        assert!(CHIP.validate().is_ok());
        let err = TWICE.validate().unwrap_err();
        assert!(matches!(err, StyleError::Duplicate { name: "root", .. }));
    }

    #[test]
    fn test_resolve_all_covers_every_part() {
        let resolved = CHIP.resolve_all(&PassThroughOptions::new().focused(true));
        assert_eq!(resolved.get("root"), Some("chip ring"));
        assert_eq!(resolved.get("label"), Some("text-sm"));
        assert_eq!(resolved.len(), 3);
    }
}

//! Preset struct for collecting widget style maps.

use tracing::trace;

use super::{INPUT_TEXT, MENU, PASSWORD};
use crate::options::PassThroughOptions;
use crate::style::{ResolvedPassThrough, StyleError, StyleSpec};

/// A named collection of widget style maps handed to the renderer.
///
/// Presets wrap a list of [`StyleSpec`]s and provide a fluent builder API
/// for assembling them.
///
/// # Example
///
/// ```rust
/// use passthrough::{Preset, PassThroughOptions, Size, INPUT_TEXT, MENU};
///
/// let preset = Preset::new().add(&INPUT_TEXT).add(&MENU);
///
/// let opts = PassThroughOptions::new().size(Size::Small);
/// let class = preset.resolve("inputtext", "root", &opts).unwrap();
/// assert!(class.ends_with("text-xs px-2 py-2"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Preset {
    widgets: Vec<&'static StyleSpec>,
}

impl Preset {
    /// Creates an empty preset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Tailwind preset with every bundled widget.
    pub fn tailwind() -> Self {
        Self::new().add(&INPUT_TEXT).add(&MENU).add(&PASSWORD)
    }

    /// Adds a widget style map, returning an updated preset for chaining.
    pub fn add(mut self, spec: &'static StyleSpec) -> Self {
        self.widgets.push(spec);
        self
    }

    /// Widget names in insertion order.
    pub fn widgets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.widgets.iter().map(|spec| spec.name())
    }

    /// Looks up a widget by name.
    pub fn get(&self, widget: &str) -> Option<&'static StyleSpec> {
        self.widgets.iter().copied().find(|spec| spec.name() == widget)
    }

    /// Resolves one part of one widget.
    pub fn resolve(
        &self,
        widget: &str,
        part: &str,
        opts: &PassThroughOptions,
    ) -> Result<String, StyleError> {
        trace!(widget, part, "preset lookup");
        self.require(widget)?.try_resolve(part, opts)
    }

    /// Resolves every part of one widget.
    pub fn resolve_all(
        &self,
        widget: &str,
        opts: &PassThroughOptions,
    ) -> Result<ResolvedPassThrough, StyleError> {
        Ok(self.require(widget)?.resolve_all(opts))
    }

    /// Validates that widget names are unique and every widget has unique parts.
    pub fn validate(&self) -> Result<(), StyleError> {
        for (i, spec) in self.widgets.iter().enumerate() {
            if self.widgets[..i].iter().any(|earlier| earlier.name() == spec.name()) {
                return Err(StyleError::Duplicate {
                    owner: "preset".to_string(),
                    name: spec.name(),
                });
            }
            spec.validate()?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn require(&self, widget: &str) -> Result<&'static StyleSpec, StyleError> {
        self.get(widget).ok_or_else(|| StyleError::UnknownWidget {
            widget: widget.to_string(),
            available: self.widgets().collect(),
        })
    }
}

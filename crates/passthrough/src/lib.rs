//! # Passthrough - Tailwind pass-through presets and browser support detection
//!
//! `passthrough` supplies the presentation-layer data a component renderer
//! needs: per-widget maps from part name to CSS classes, and a check of
//! whether a user agent meets the supported browser matrix.
//!
//! ## Core Concepts
//!
//! - [`StyleSpec`]: A widget's fixed table of part names to [`PartStyle`]s
//! - [`PassThroughOptions`]: Render-time props, part context and instance state
//! - [`ClassList`]: Ordered, conditionally included class fragments
//! - [`Preset`]: The bundled widgets, looked up by name
//! - [`is_supported`]: User-agent classification against [`SUPPORTED_BROWSERS`]
//!
//! ## Quick Start
//!
//! ```rust
//! use passthrough::{PassThroughOptions, Size, Strength, INPUT_TEXT, PASSWORD};
//!
//! let opts = PassThroughOptions::new().size(Size::Small).disabled(true);
//! let root = INPUT_TEXT.resolve("root", &opts).unwrap();
//! assert!(root.contains("opacity-60"));
//! assert!(root.ends_with("text-xs px-2 py-2"));
//!
//! let meter = PassThroughOptions::new().strength(Strength::Weak);
//! let label = PASSWORD.resolve("meterlabel", &meter).unwrap();
//! assert!(label.contains("bg-red-500"));
//! ```
//!
//! ## Resolution Rules
//!
//! Resolvers never fail. Absent options select the default branch: no size
//! means the default size classes, no meter strength means no colour, and
//! unset flags count as false. Fragments are joined with single spaces in
//! declaration order without de-duplication.
//!
//! ## Handing Classes to a Renderer
//!
//! [`StyleSpec::resolve_all`] produces a [`ResolvedPassThrough`] that
//! serializes to the `{ part: { class } }` object shape:
//!
//! ```rust
//! use passthrough::{PassThroughOptions, MENU};
//!
//! let json = MENU
//!     .resolve_all(&PassThroughOptions::new().focused(true))
//!     .to_json()
//!     .unwrap();
//! assert!(json.contains("\"enterFromClass\":\"opacity-0 scale-75\""));
//! ```

pub mod browser;
pub mod class;
pub mod options;
pub mod style;
pub mod theme;

pub use browser::{is_supported, SUPPORTED_BROWSERS, SUPPORTED_BROWSERS_PATTERN};
pub use class::ClassList;
pub use options::{Instance, Meter, PartContext, PassThroughOptions, Props, Size, Strength};
pub use style::{
    PartResolver, PartStyle, ResolvedPassThrough, StyleError, StyleSpec, TransitionSpec,
};
pub use theme::{Preset, INPUT_TEXT, MENU, OVERLAY_TRANSITION, PASSWORD};

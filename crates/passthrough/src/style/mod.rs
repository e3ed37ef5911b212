//! Style maps for pass-through widgets.
//!
//! This module provides the declarative primitives the presets are built from:
//!
//! - [`StyleSpec`]: A widget's fixed table of part names to [`PartStyle`]s
//! - [`PartStyle`]: A literal class string, a literal class list, or a resolver
//! - [`TransitionSpec`]: Enter/leave classes for overlay transitions
//! - [`ResolvedPassThrough`]: A fully resolved widget, ready to serialize
//! - [`StyleError`]: Errors from lookups and serialization

mod error;
mod resolved;
mod spec;
mod transition;

pub use error::StyleError;
pub use resolved::ResolvedPassThrough;
pub use spec::{PartResolver, PartStyle, StyleSpec};
pub use transition::TransitionSpec;

//! Render-time input for part resolvers.
//!
//! [`PassThroughOptions`] mirrors the record a renderer hands to each
//! pass-through part: the component `props`, the per-part `context`, and
//! the component `instance`. Every field has a falsy default so that a
//! missing value always selects the "off" or default branch of a resolver.
//!
//! All types deserialize from the camelCase shape renderers use, e.g.
//!
//! ```json
//! { "props": { "size": "small", "toggleMask": true },
//!   "context": { "focused": true },
//!   "instance": { "meter": { "strength": "weak" } } }
//! ```
//!
//! Unrecognised `size` or `strength` strings deserialize to `None`, flags
//! follow browser truthiness, and a `null` or non-object record takes its
//! defaults.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Component size variant. `None` in [`Props::size`] is the default size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl Size {
    /// Parses the prop value, returning `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(Size::Small),
            "large" => Some(Size::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Large => "large",
        }
    }
}

/// Password strength as computed by the password meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Parses the meter value, returning `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "weak" => Some(Strength::Weak),
            "medium" => Some(Strength::Medium),
            "strong" => Some(Strength::Strong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

/// Component props relevant to styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Props {
    #[serde(deserialize_with = "lenient_size")]
    pub size: Option<Size>,
    #[serde(deserialize_with = "truthy")]
    pub disabled: bool,
    #[serde(deserialize_with = "truthy")]
    pub toggle_mask: bool,
}

/// Per-part state supplied by the component while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartContext {
    #[serde(deserialize_with = "truthy")]
    pub disabled: bool,
    #[serde(deserialize_with = "truthy")]
    pub focused: bool,
}

/// Password meter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meter {
    #[serde(deserialize_with = "lenient_strength")]
    pub strength: Option<Strength>,
}

/// Component instance state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    #[serde(deserialize_with = "lenient_meter")]
    pub meter: Option<Meter>,
}

impl Instance {
    /// Strength reported by the meter, if there is a meter at all.
    pub fn strength(&self) -> Option<Strength> {
        self.meter.and_then(|meter| meter.strength)
    }
}

/// Everything a part resolver may read.
///
/// # Example
///
/// ```rust
/// use passthrough::{PassThroughOptions, Size, Strength};
///
/// let opts = PassThroughOptions::new()
///     .size(Size::Large)
///     .disabled(true)
///     .strength(Strength::Weak);
///
/// assert_eq!(opts.props.size, Some(Size::Large));
/// assert!(opts.context.disabled);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassThroughOptions {
    #[serde(deserialize_with = "record_or_default")]
    pub props: Props,
    #[serde(deserialize_with = "record_or_default")]
    pub context: PartContext,
    #[serde(deserialize_with = "record_or_default")]
    pub instance: Instance,
}

impl PassThroughOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: Size) -> Self {
        self.props.size = Some(size);
        self
    }

    /// Marks the component disabled in both props and part context.
    ///
    /// Widgets disagree on where they read the flag from, so both are set.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self.context.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.context.focused = focused;
        self
    }

    pub fn toggle_mask(mut self, toggle_mask: bool) -> Self {
        self.props.toggle_mask = toggle_mask;
        self
    }

    pub fn strength(mut self, strength: Strength) -> Self {
        self.instance.meter = Some(Meter {
            strength: Some(strength),
        });
        self
    }
}

/// Reads any JSON value with browser truthiness: `null`, `false`, `0` and
/// `""` are false, everything else is true.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Non-object values (including `null`) become the record's default.
fn record_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(D::Error::custom)
}

fn lenient_meter<'de, D>(deserializer: D) -> Result<Option<Meter>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(D::Error::custom)
}

fn lenient_size<'de, D>(deserializer: D) -> Result<Option<Size>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(Size::from_name))
}

fn lenient_strength<'de, D>(deserializer: D) -> Result<Option<Strength>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(Strength::from_name))
}

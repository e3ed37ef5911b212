//! Resolved pass-through snapshots.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::StyleError;
use super::transition::TransitionSpec;

/// Every part of one widget resolved against a fixed set of options.
///
/// Serializes to the pass-through object shape a renderer consumes:
///
/// ```json
/// { "root": { "class": "..." }, "panel": { "class": "..." },
///   "transition": { "enterFromClass": "...", ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPassThrough {
    widget: &'static str,
    parts: Vec<(&'static str, String)>,
    transition: Option<&'static TransitionSpec>,
}

impl ResolvedPassThrough {
    pub(crate) fn new(
        widget: &'static str,
        parts: Vec<(&'static str, String)>,
        transition: Option<&'static TransitionSpec>,
    ) -> Self {
        Self {
            widget,
            parts,
            transition,
        }
    }

    pub fn widget(&self) -> &'static str {
        self.widget
    }

    /// Resolved classes of a part.
    pub fn get(&self, part: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(name, _)| *name == part)
            .map(|(_, class)| class.as_str())
    }

    /// Parts and their classes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.parts.iter().map(|(name, class)| (*name, class.as_str()))
    }

    pub fn transition(&self) -> Option<&'static TransitionSpec> {
        self.transition
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Serializes the snapshot as a JSON pass-through object.
    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string(self)?)
    }
}

struct ClassEntry<'a>(&'a str);

impl Serialize for ClassEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("class", self.0)?;
        map.end()
    }
}

impl Serialize for ResolvedPassThrough {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.parts.len() + usize::from(self.transition.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (name, class) in self.iter() {
            map.serialize_entry(name, &ClassEntry(class))?;
        }
        if let Some(transition) = self.transition {
            map.serialize_entry("transition", transition)?;
        }
        map.end()
    }
}

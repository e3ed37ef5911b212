//! Ordered class-list building.
//!
//! A [`ClassList`] is the Rust counterpart of a pass-through `class` array:
//! a sequence of fragments, each either always present or gated by a
//! predicate. Resolution keeps declaration order and joins the surviving
//! fragments with single spaces.

use std::fmt;

use serde::{Serialize, Serializer};

/// An ordered list of class fragments with their inclusion predicates.
///
/// # Example
///
/// ```rust
/// use passthrough::ClassList;
///
/// let disabled = false;
/// let classes = ClassList::new()
///     .push("inline-flex relative")
///     .when(disabled, "opacity-60 pointer-events-none");
///
/// assert_eq!(classes.build(), "inline-flex relative");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    fragments: Vec<(bool, &'static str)>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment that is always included.
    pub fn push(self, fragment: &'static str) -> Self {
        self.when(true, fragment)
    }

    /// Appends a fragment that is included only when `predicate` holds.
    pub fn when(mut self, predicate: bool, fragment: &'static str) -> Self {
        self.fragments.push((predicate, fragment));
        self
    }

    /// Appends a run of unconditional fragments.
    pub fn extend<I>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.fragments
            .extend(fragments.into_iter().map(|fragment| (true, fragment)));
        self
    }

    /// Iterates the included fragments in declaration order.
    ///
    /// Fragments are trimmed and empty ones are skipped.
    pub fn fragments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fragments
            .iter()
            .filter(|(included, _)| *included)
            .map(|&(_, fragment)| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
    }

    /// Iterates every individual class token, repeats included.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fragments().flat_map(str::split_whitespace)
    }

    /// Returns true if `token` is one of the resolved class tokens.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }

    /// Returns true if no fragment survives resolution.
    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none()
    }

    /// Resolves the list into a single space-separated class string.
    ///
    /// No de-duplication is performed; repeated tokens are kept in place.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for fragment in self.fragments() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(fragment);
        }
        out
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.build())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const POOL: [&str; 4] = ["m-0", "p-3 text-base", "opacity-60", "rounded-lg"];

    proptest! {
        #[test]
        fn build_joins_only_included_fragments(
            flags in prop::collection::vec(prop::bool::ANY, 0..12),
        ) {
            let mut classes = ClassList::new();
            let mut expected: Vec<&str> = Vec::new();
            for (i, flag) in flags.iter().enumerate() {
                let fragment = POOL[i % POOL.len()];
                classes = classes.when(*flag, fragment);
                if *flag {
                    expected.push(fragment);
                }
            }

            prop_assert_eq!(classes.build(), expected.join(" "));
        }

        #[test]
        fn build_is_idempotent(flags in prop::collection::vec(prop::bool::ANY, 0..12)) {
            let classes = flags
                .iter()
                .enumerate()
                .fold(ClassList::new(), |acc, (i, flag)| acc.when(*flag, POOL[i % POOL.len()]));

            prop_assert_eq!(classes.build(), classes.build());
            prop_assert!(!classes.build().contains("  "));
        }
    }
}

//! Overlay transition classes.

use serde::Serialize;

/// CSS classes applied while an overlay enters and leaves.
///
/// Serializes with the camelCase keys renderers expect
/// (`enterFromClass`, `enterActiveClass`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSpec {
    pub enter_from_class: &'static str,
    pub enter_active_class: &'static str,
    pub leave_active_class: &'static str,
    pub leave_to_class: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_keys() {
        let spec = TransitionSpec {
            enter_from_class: "a",
            enter_active_class: "b",
            leave_active_class: "c",
            leave_to_class: "d",
        };
        let value = serde_json::to_value(spec).unwrap();
        assert_eq!(value["enterFromClass"], "a");
        assert_eq!(value["enterActiveClass"], "b");
        assert_eq!(value["leaveActiveClass"], "c");
        assert_eq!(value["leaveToClass"], "d");
    }
}

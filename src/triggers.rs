//! Escalation trigger handling: ordered-set toggling for the wizard
//! checkboxes and the parse/join pair for the `handoff_logic` string stored
//! on the agent config.
//!
//! The stored form is `當使用者提到以下任何一項時轉接：a, b, c` where each
//! entry is either one of [`STANDARD_HANDOFF_OPTIONS`] or free text. Free
//! text entries are folded into a single custom field joined with a
//! full-width comma.

use crate::constants::{
    CUSTOM_TRIGGER_JOIN, HANDOFF_PREFIX, STANDARD_HANDOFF_OPTIONS, TRIGGER_SEPARATOR,
};

/// Toggle membership of `value` in an insertion-ordered trigger list.
pub fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|t| t == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

pub fn is_standard(value: &str) -> bool {
    STANDARD_HANDOFF_OPTIONS.contains(&value)
}

/// Build the `handoff_logic` string from selected standard triggers plus the
/// custom free-text field. The custom field travels as one entry; it may
/// itself contain full-width commas.
pub fn join_handoff_logic(standard: &[String], custom: &str) -> String {
    let mut entries: Vec<&str> = standard.iter().map(|s| s.as_str()).collect();
    let custom = custom.trim();
    if !custom.is_empty() {
        entries.push(custom);
    }
    format!("{}{}", HANDOFF_PREFIX, entries.join(TRIGGER_SEPARATOR))
}

/// Split a stored `handoff_logic` string back into (standard triggers,
/// custom text). Absent or non-matching input yields an empty selection;
/// this path must never fail since older agents may have no handoff config
/// at all.
pub fn parse_handoff_logic(raw: Option<&str>) -> (Vec<String>, String) {
    let raw = match raw {
        Some(r) => r,
        None => return (Vec::new(), String::new()),
    };

    let rest = match raw.split_once(HANDOFF_PREFIX) {
        Some((_, rest)) => rest,
        None => return (Vec::new(), String::new()),
    };

    let mut standard = Vec::new();
    let mut custom_parts = Vec::new();
    for entry in rest.split(TRIGGER_SEPARATOR) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if is_standard(entry) {
            standard.push(entry.to_string());
        } else {
            custom_parts.push(entry);
        }
    }

    (standard, custom_parts.join(CUSTOM_TRIGGER_JOIN))
}

/// Apply a parsed `handoff_logic` to a trigger list and custom field.
/// The custom field is only filled when currently empty so text the user is
/// actively editing never gets clobbered by a refetch.
pub fn apply_parsed(
    raw: Option<&str>,
    triggers: &mut Vec<String>,
    custom: &mut String,
) {
    let (standard, parsed_custom) = parse_handoff_logic(raw);
    *triggers = standard;
    if custom.trim().is_empty() {
        *custom = parsed_custom;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn toggle_adds_then_removes_preserving_order() {
        let mut list: Vec<String> = Vec::new();
        toggle(&mut list, "a");
        toggle(&mut list, "b");
        toggle(&mut list, "c");
        assert_eq!(list, vec!["a", "b", "c"]);
        toggle(&mut list, "b");
        assert_eq!(list, vec!["a", "c"]);
        toggle(&mut list, "b");
        assert_eq!(list, vec!["a", "c", "b"]);
    }

    #[test]
    fn parse_tolerates_missing_and_garbage_input() {
        assert_eq!(parse_handoff_logic(None), (vec![], String::new()));
        assert_eq!(parse_handoff_logic(Some("")), (vec![], String::new()));
        assert_eq!(
            parse_handoff_logic(Some("遇到問題就轉接")),
            (vec![], String::new())
        );
    }

    #[test]
    fn parse_partitions_standard_and_custom() {
        let raw = format!(
            "{}客訴/負評/情緒激動, 要找老闆, 退款/退貨/爭議款項, 問發票",
            HANDOFF_PREFIX
        );
        let (standard, custom) = parse_handoff_logic(Some(&raw));
        assert_eq!(standard, vec!["客訴/負評/情緒激動", "退款/退貨/爭議款項"]);
        assert_eq!(custom, "要找老闆、問發票");
    }

    #[test]
    fn apply_parsed_preserves_existing_custom_text() {
        let raw = format!("{}要找老闆", HANDOFF_PREFIX);
        let mut triggers = vec!["stale".to_string()];
        let mut custom = "已輸入的文字".to_string();
        apply_parsed(Some(&raw), &mut triggers, &mut custom);
        assert!(triggers.is_empty());
        assert_eq!(custom, "已輸入的文字");

        let mut empty_custom = String::new();
        apply_parsed(Some(&raw), &mut triggers, &mut empty_custom);
        assert_eq!(empty_custom, "要找老闆");
    }

    /// Any subset of the standard options, in any order.
    fn standard_subset() -> impl Strategy<Value = Vec<String>> {
        proptest::sample::subsequence(
            STANDARD_HANDOFF_OPTIONS
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
            0..=STANDARD_HANDOFF_OPTIONS.len(),
        )
    }

    /// Custom text that survives the round trip: no half-width comma-space
    /// separator and not itself a standard option.
    fn custom_text() -> impl Strategy<Value = String> {
        "[\\PC--[,]]{0,12}".prop_filter("must not collide with a standard option", |s| {
            !is_standard(s.trim())
        })
    }

    proptest! {
        #[test]
        fn join_then_parse_round_trips(selected in standard_subset()) {
            let raw = join_handoff_logic(&selected, "");
            let (standard, custom) = parse_handoff_logic(Some(&raw));
            prop_assert_eq!(standard, selected);
            prop_assert_eq!(custom, "");
        }

        #[test]
        fn round_trip_keeps_custom_entry(
            selected in standard_subset(),
            custom in custom_text(),
        ) {
            let raw = join_handoff_logic(&selected, &custom);
            let (standard, parsed_custom) = parse_handoff_logic(Some(&raw));
            prop_assert_eq!(standard, selected);
            prop_assert_eq!(parsed_custom, custom.trim());
        }

        #[test]
        fn parse_is_idempotent(selected in standard_subset(), custom in custom_text()) {
            let raw = join_handoff_logic(&selected, &custom);
            let (s1, c1) = parse_handoff_logic(Some(&raw));
            let rejoined = join_handoff_logic(&s1, &c1);
            let (s2, c2) = parse_handoff_logic(Some(&rejoined));
            prop_assert_eq!(s1, s2);
            prop_assert_eq!(c1, c2);
        }
    }
}

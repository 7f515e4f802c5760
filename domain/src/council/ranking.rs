//! Ranking-text parsing for peer rankings
//!
//! Ranking models are instructed to end their evaluation with a
//! `FINAL RANKING:` marker followed by a numbered list of response labels.
//! Models drift from the contract often enough that parsing is a fallback
//! chain rather than a single pattern. Malformed output is an expected
//! input class: the parser returns an empty list, never an error.

use crate::council::label::ResponseLabel;
use regex::Regex;
use std::sync::LazyLock;

/// The literal marker the ranking prompt demands.
///
/// Also matches the bold variant `**FINAL RANKING:**` since the marker text
/// is a substring of it.
const RANKING_MARKER: &str = "FINAL RANKING:";

static NUMBERED_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*Response ([A-Z])").unwrap());

static BARE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Response ([A-Z])").unwrap());

/// Extract an ordered best-first label sequence from free-form ranking text.
///
/// In priority order:
/// 1. If `FINAL RANKING:` occurs, only the text after its first occurrence
///    is considered.
/// 2. Numbered entries (`1. Response A`) win if any exist.
/// 3. Otherwise every bare `Response X` token in the section, in order.
/// 4. With no marker at all, the entire text is scanned for bare tokens.
///
/// Duplicate labels are preserved as repeated positions.
pub fn parse_ranking(text: &str) -> Vec<ResponseLabel> {
    if let Some(marker_pos) = text.find(RANKING_MARKER) {
        let section = &text[marker_pos + RANKING_MARKER.len()..];

        let numbered = collect_labels(&NUMBERED_ENTRY, section);
        if !numbered.is_empty() {
            return numbered;
        }

        return collect_labels(&BARE_LABEL, section);
    }

    collect_labels(&BARE_LABEL, text)
}

fn collect_labels(pattern: &Regex, text: &str) -> Vec<ResponseLabel> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let letter = caps.get(1)?.as_str().chars().next()?;
            ResponseLabel::from_letter(letter)
        })
        .collect()
}

//! Output formatter trait

use council_domain::CouncilVerdict;

/// Trait for formatting council verdicts
pub trait OutputFormatter {
    /// Format the complete verdict
    fn format(&self, verdict: &CouncilVerdict) -> String;

    /// Format as JSON
    fn format_json(&self, verdict: &CouncilVerdict) -> String;

    /// Format the synthesis only (concise output)
    fn format_synthesis_only(&self, verdict: &CouncilVerdict) -> String;
}

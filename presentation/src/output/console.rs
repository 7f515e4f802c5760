//! Console rendering of council verdicts

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_domain::CouncilVerdict;

/// Formats verdicts for terminal output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full view: stage-1 responses, consensus table, synthesis
    pub fn format(verdict: &CouncilVerdict) -> String {
        ConsoleFormatter.render_full(verdict)
    }

    /// Only the chairman's synthesis
    pub fn format_synthesis_only(verdict: &CouncilVerdict) -> String {
        verdict.stage3.content.clone()
    }

    /// Pretty-printed JSON of the whole verdict
    pub fn format_json(verdict: &CouncilVerdict) -> String {
        serde_json::to_string_pretty(verdict)
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    fn render_full(&self, verdict: &CouncilVerdict) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "\n{}\n\n",
            "=== Stage 1: Responses ===".bold().cyan()
        ));
        for response in &verdict.stage1 {
            out.push_str(&format!(
                "{}\n{}\n\n",
                response.model.short_name().bold(),
                response.content
            ));
        }

        if !verdict.metadata.aggregate_rankings.is_empty() {
            out.push_str(&format!(
                "{}\n\n",
                "=== Stage 2: Consensus Ranking ===".bold().cyan()
            ));
            for (place, entry) in verdict.metadata.aggregate_rankings.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} (avg rank {:.2} across {} rankings)\n",
                    place + 1,
                    entry.model.short_name().bold(),
                    entry.average_rank,
                    entry.rankings_count
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "{}\n\n{}\n",
            "=== Stage 3: Synthesis ===".bold().cyan(),
            verdict.stage3.content
        ));

        if verdict.stage3.is_sentinel() {
            out.push_str(&format!(
                "\n{}\n",
                "(degraded output: the synthesis stage failed)".yellow()
            ));
        }

        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, verdict: &CouncilVerdict) -> String {
        self.render_full(verdict)
    }

    fn format_json(&self, verdict: &CouncilVerdict) -> String {
        Self::format_json(verdict)
    }

    fn format_synthesis_only(&self, verdict: &CouncilVerdict) -> String {
        Self::format_synthesis_only(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{
        CouncilMetadata, LabelMap, MemberResponse, Model, ModelReply, Synthesis,
    };

    fn verdict() -> CouncilVerdict {
        let stage1 = vec![MemberResponse::from_reply(
            Model::ClaudeSonnet45,
            ModelReply::from_content("an answer"),
        )];
        let labels = LabelMap::assign(vec![Model::ClaudeSonnet45]);
        CouncilVerdict {
            stage1,
            stage2: vec![],
            stage3: Synthesis::from_reply(
                Model::Gemini3Pro,
                ModelReply::from_content("the synthesis"),
            ),
            metadata: CouncilMetadata {
                label_to_model: labels,
                aggregate_rankings: vec![],
            },
        }
    }

    #[test]
    fn test_synthesis_only_is_bare_content() {
        assert_eq!(
            ConsoleFormatter::format_synthesis_only(&verdict()),
            "the synthesis"
        );
    }

    #[test]
    fn test_full_view_contains_stages() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format(&verdict());
        assert!(out.contains("Stage 1: Responses"));
        assert!(out.contains("an answer"));
        assert!(out.contains("Stage 3: Synthesis"));
        assert!(out.contains("the synthesis"));
    }

    #[test]
    fn test_json_view_parses_back() {
        let out = ConsoleFormatter::format_json(&verdict());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["stage3"]["content"], "the synthesis");
        assert_eq!(
            value["metadata"]["label_to_model"]["Response A"],
            "anthropic/claude-sonnet-4.5"
        );
    }

    #[test]
    fn test_degraded_synthesis_is_called_out() {
        colored::control::set_override(false);
        let mut v = verdict();
        v.stage3 = Synthesis::unavailable(Model::Gemini3Pro);
        let out = ConsoleFormatter::format(&v);
        assert!(out.contains("degraded output"));
    }
}

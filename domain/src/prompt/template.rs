//! Prompt templates for the council flow
//!
//! History is always rendered as one flattened role-labeled preamble block
//! rather than structured turns, so every stage sees a single prompt
//! string. Stage prompts embed their output contracts here; the ranking
//! contract is what [`crate::council::ranking::parse_ranking`] expects.

use crate::council::label::ResponseLabel;
use crate::session::entities::Message;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Flatten history into the role-labeled preamble block
    fn history_lines(history: &[Message], parts: &mut Vec<String>) {
        for message in history {
            parts.push(format!("{}: {}", message.role.label(), message.content));
        }
    }

    /// Stage-1 prompt: the bare query, or the flattened history followed by
    /// the current question.
    pub fn collect_prompt(query: &str, history: &[Message]) -> String {
        if history.is_empty() {
            return query.to_string();
        }

        let mut text = String::from("Previous conversation context:\n\n");
        for message in history {
            text.push_str(&format!(
                "{}: {}\n\n",
                message.role.label(),
                message.content
            ));
        }
        text.push_str(&format!(
            "Current question: {query}\n\nPlease provide your response considering the conversation history."
        ));
        text
    }

    /// Stage-2 prompt: anonymized responses in label order, the evaluation
    /// criteria, and the exact ranking output contract.
    pub fn ranking_prompt(
        query: &str,
        responses: &[(ResponseLabel, &str)],
        history: &[Message],
    ) -> String {
        let mut parts = Vec::new();

        if !history.is_empty() {
            parts.push("Previous conversation context:".to_string());
            Self::history_lines(history, &mut parts);
            parts.push(String::new());
        }

        parts.push(format!("Current question: {query}"));
        parts.push(String::new());
        parts.push("Here are the anonymized responses from the council members:".to_string());
        parts.push(String::new());

        for (label, content) in responses {
            parts.push(format!("**{label}:**"));
            parts.push((*content).to_string());
            parts.push(String::new());
        }

        parts.extend(
            [
                "Please evaluate each response based on:",
                "1. Accuracy and factual correctness",
                "2. Insightfulness and depth",
                "3. Clarity and coherence",
                "4. Relevance to the question and conversation context",
                "",
                "After evaluating each response, please provide a final ranking from best to worst.",
                "",
                "IMPORTANT: Your final ranking MUST be formatted EXACTLY as follows:",
                "",
                "**FINAL RANKING:**",
                "1. Response X (best)",
                "2. Response Y",
                "3. Response Z",
                "... (worst)",
                "",
                "Each line must contain the number, a period, a space, then ONLY the response label.",
                "Do not include any text after the ranking section.",
            ]
            .map(String::from),
        );

        parts.join("\n")
    }

    /// Stage-3 prompt: attributed stage-1 responses and stage-2 ranking
    /// texts verbatim, with synthesis instructions that acknowledge the
    /// conversation when history is present.
    pub fn synthesis_prompt(
        query: &str,
        responses: &[(&str, &str)],
        rankings: &[(&str, &str)],
        history: &[Message],
    ) -> String {
        let mut parts = Vec::new();

        if !history.is_empty() {
            parts.push("Conversation History:".to_string());
            Self::history_lines(history, &mut parts);
            parts.push(String::new());
            parts.push("---".to_string());
        }

        parts.push("Current Exchange:".to_string());
        parts.push(format!("Question: {query}"));
        parts.push(String::new());
        parts.push("STAGE 1 - Individual Responses:".to_string());

        for (model, content) in responses {
            parts.push(format!("**{model}:**"));
            parts.push((*content).to_string());
            parts.push(String::new());
        }

        parts.push("STAGE 2 - Peer Rankings:".to_string());

        for (model, ranking) in rankings {
            parts.push(format!("**{model}:**"));
            parts.push((*ranking).to_string());
            parts.push(String::new());
        }

        if !history.is_empty() {
            parts.extend(
                [
                    "Please synthesize a comprehensive response to the current question that:",
                    "1. Considers the ongoing conversation context and flow",
                    "2. Integrates the best insights from the individual responses",
                    "3. Takes into account the peer evaluations",
                    "4. Provides a coherent, natural continuation of the conversation",
                    "",
                    "Your response should acknowledge the conversation history while providing a thorough answer to the current question.",
                ]
                .map(String::from),
            );
        } else {
            parts.extend(
                [
                    "Please synthesize a comprehensive response to the current question that:",
                    "1. Integrates the best insights from the individual responses",
                    "2. Takes into account the peer evaluations",
                    "3. Provides a clear, coherent answer",
                    "",
                    "Your response should reflect the collective wisdom of the council while addressing the user's question directly.",
                ]
                .map(String::from),
            );
        }

        parts.join("\n")
    }

    /// Title-generation prompt for a conversation's first question
    pub fn title_prompt(query: &str) -> String {
        format!(
            r#"Generate a very short title (3-5 words maximum) that summarizes the following question.
The title should be concise and descriptive. Do not use quotes or punctuation in the title.

Question: {query}

Title:"#
        )
    }

    /// Summarization prompt for condensed older history
    pub fn summary_prompt(conversation_text: &str) -> String {
        format!(
            r#"Please summarize the following conversation in a concise way that preserves the key points and maintains the conversation flow:

{conversation_text}

Provide a summary that would help someone continue this conversation naturally. Focus on the main topics discussed and any important conclusions reached.

Please keep the summary under 300 words."#
        )
    }
}

//! Prompt sent to the model provider.

/// Builds the instruction asking the model for relationships among `words`,
/// answered as JSON only (`edges` + `isolated`).
pub fn build_prompt(words: &[String]) -> String {
    format!(
        r#"You are given these words: {}.
Find semantic relationships between them.

Return result ONLY in JSON with this format:
{{
  "edges": [
    {{ "from": "<word1>", "to": "<word2>", "relation": "<type>", "why": "<explanation>" }}
  ],
  "isolated": ["<words with no relation>"]
}}"#,
        words.join(", ")
    )
}

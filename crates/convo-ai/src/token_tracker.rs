//! Token usage tracking across completions and models.

use std::collections::HashMap;

use crate::TokenUsage;

/// Tracks cumulative token usage per model.
pub struct TokenTracker {
    /// Total usage across all models.
    total: TokenUsage,
    /// Usage broken down by model name.
    by_model: HashMap<String, TokenUsage>,
    /// Number of completion calls made.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self {
            total: TokenUsage::default(),
            by_model: HashMap::new(),
            call_count: 0,
        }
    }

    /// Record token usage from one completion call.
    pub fn record(&mut self, model: &str, usage: &TokenUsage) {
        self.total.input_tokens += usage.input_tokens;
        self.total.output_tokens += usage.output_tokens;
        self.call_count += 1;

        let entry = self.by_model.entry(model.to_string()).or_default();
        entry.input_tokens += usage.input_tokens;
        entry.output_tokens += usage.output_tokens;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_model(&self, model: &str) -> Option<&TokenUsage> {
        self.by_model.get(model)
    }

    /// Total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl Default for TokenTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(input: u64, output: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
        }
    }

    #[test]
    fn records_totals_and_per_model() {
        let mut tracker = TokenTracker::new();
        tracker.record("gpt-4o-mini", &usage(10, 5));
        tracker.record("gpt-4o-mini", &usage(20, 7));
        tracker.record("gpt-4o", &usage(1, 1));

        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.total_tokens(), 44);
        assert_eq!(tracker.for_model("gpt-4o-mini"), Some(&usage(30, 12)));
        assert_eq!(tracker.for_model("other"), None);
    }
}

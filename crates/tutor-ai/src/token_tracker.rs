//! Cumulative token usage of one model binding.

use crate::TokenUsage;

/// Running total of token usage and the number of calls it covers.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    calls: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the usage of one model call; saturates instead of overflowing.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.calls += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn call_count(&self) -> u64 {
        self.calls
    }
}

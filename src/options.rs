//! Comparison configuration options.

/// How two busted hands are resolved against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum BothBustRule {
    /// The dealer-flagged hand wins; two hands with the same flag push.
    #[default]
    DealerWins,
    /// Two busted hands always push.
    Push,
}

/// Configuration options for comparing hands.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjhand::{BothBustRule, CompareOptions};
///
/// let options = CompareOptions::default().with_both_bust(BothBustRule::Push);
/// assert_eq!(options.both_bust, BothBustRule::Push);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    /// Resolution of a comparison where both hands are bust.
    pub both_bust: BothBustRule,
}

impl CompareOptions {
    /// Sets the rule used when both hands are bust.
    #[must_use]
    pub const fn with_both_bust(mut self, rule: BothBustRule) -> Self {
        self.both_bust = rule;
        self
    }
}

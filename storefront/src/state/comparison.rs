//! Comparison hand-off from the listing to the compare view.
//!
//! The listing parks the selected pair here right before navigating, playing
//! the role of navigation state. The compare view takes it when the ids in
//! the URL match and otherwise reloads both vehicles by id.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

use catalog::compare::ComparisonPair;

#[derive(Clone, Debug, Default)]
pub struct ComparisonState {
    pub pending: Option<ComparisonPair>,
}

impl ComparisonState {
    #[must_use]
    pub fn holding(pair: ComparisonPair) -> Self {
        Self { pending: Some(pair) }
    }

    /// The parked pair, if it is the one the route asks for.
    #[must_use]
    pub fn pair_for(&self, left: i64, right: i64) -> Option<ComparisonPair> {
        self.pending
            .as_ref()
            .filter(|pair| pair.left.id == left && pair.right.id == right)
            .cloned()
    }
}

//! Ranking of small neighbor candidate sets.
//!
//! Candidate sets are bounded by a node's degree, so a plain stable sort is
//! all that is needed.

use serde::Serialize;

/// An issue id paired with one metric score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredId {
    pub id: String,
    pub score: f64,
}

impl ScoredId {
    pub fn new(id: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// Sort by score descending. Equal scores keep their input order.
pub fn rank_by_score(mut items: Vec<ScoredId>) -> Vec<ScoredId> {
    // `sort_by` is stable; `total_cmp` keeps NaN from breaking the order.
    items.sort_by(|a, b| b.score.total_cmp(&a.score));
    items
}

/// Sum of every candidate's score, not just the displayed ones.
pub fn total_score(items: &[ScoredId]) -> f64 {
    items.iter().map(|item| item.score).sum()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output is a permutation sorted by score, ties in input order.
        #[test]
        fn ranking_is_stable_descending(scores in prop::collection::vec(0u8..5, 0..40)) {
            let input: Vec<ScoredId> = scores
                .iter()
                .enumerate()
                .map(|(i, s)| ScoredId::new(i.to_string(), f64::from(*s)))
                .collect();
            let ranked = rank_by_score(input.clone());
            prop_assert_eq!(ranked.len(), input.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    let a: usize = pair[0].id.parse().unwrap();
                    let b: usize = pair[1].id.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}

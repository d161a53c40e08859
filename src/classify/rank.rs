use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::Prediction;

/// How many predictions the ranked list keeps by default.
pub const TOP_K: usize = 10;

/// Sort a class-to-probability map descending by probability and keep the
/// `k` highest entries.
///
/// The sort is stable, so ties keep the map's iteration order. An empty
/// map yields an empty list; fewer than `k` classes yields all of them,
/// still sorted.
pub fn rank(probabilities: &HashMap<String, f32>, k: usize) -> Vec<Prediction> {
    let mut ranked: Vec<Prediction> = probabilities
        .iter()
        .map(|(label, probability)| Prediction {
            label: label.clone(),
            probability: *probability,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(k);

    ranked
}

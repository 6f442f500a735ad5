//! Recommendation pipeline - needs extraction, filtering, scoring, selection

pub mod filters;
pub mod needs;
pub mod scoring;

pub use needs::{ExtractedNeeds, extract_needs};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::exercises::Exercise;
use crate::profile::SportProfile;

use filters::has_contraindication;
use scoring::score_exercise;

/// Number of exercises kept in the shortlist
pub const SHORTLIST_SIZE: usize = 5;

/// Sentinel score for contraindicated exercises; never survives selection
const CONTRAINDICATED_SCORE: f64 = -9999.0;

/// Exercise together with its relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredExercise {
    #[serde(flatten)]
    pub exercise: Exercise,
    pub score: f64,
}

/// Rank the catalog against a profile and return the top-5 shortlist,
/// descending by score, contraindicated and irrelevant exercises dropped.
/// An empty result means no exercise fits; the caller surfaces that.
pub fn recommend(profile: &SportProfile, catalog: &[Exercise]) -> Vec<ScoredExercise> {
    let needs = extract_needs(profile);

    let mut scored: Vec<ScoredExercise> = catalog
        .iter()
        .map(|ex| {
            let score = if has_contraindication(ex, &needs.douleurs, &needs.limitations) {
                CONTRAINDICATED_SCORE
            } else {
                score_exercise(ex, &needs)
            };
            ScoredExercise { exercise: ex.clone(), score }
        })
        .filter(|s| s.score > 0.0)
        .collect();

    // Stable sort keeps catalog order for equal scores
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(SHORTLIST_SIZE);

    debug!(candidates = scored.len(), "shortlist établie");
    scored
}

//! Contraindication filter - hard exclusion before any scoring

use crate::exercises::Exercise;

/// True iff one of the exercise's contraindication tags appears in the
/// user's current pains or mobility limitations.
pub fn has_contraindication(exercise: &Exercise, douleurs: &[String], limitations: &[String]) -> bool {
    douleurs
        .iter()
        .chain(limitations.iter())
        .any(|tag| exercise.contre_indications.contains(tag))
}

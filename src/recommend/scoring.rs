//! Relevance scoring - weighted additive heuristics against the needs record

use crate::exercises::{Exercise, Niveau};
use crate::profile::Frequence;

use super::needs::ExtractedNeeds;

/// Weight of goal matches
pub const W_OBJECTIFS: f64 = 3.0;
/// Weight of level fit
pub const W_NIVEAU: f64 = 2.0;
/// Weight of equipment availability
pub const W_MATERIEL: f64 = 2.0;
/// Weight of category preferences
pub const W_PREFERENCES: f64 = 2.0;

/// Bonus per exercise category associated with a practiced sport
const SPORT_AFFINITY_BONUS: f64 = 1.5;

/// Categories associated with each practiced sport
fn sport_categories(sport: &str) -> &'static [&'static str] {
    match sport {
        "musculation" => &["renforcement_musculaire", "poids_du_corps"],
        "course" | "velo" | "natation" => &["cardio", "endurance"],
        "yoga_pilates" => &["yoga_mobilite", "mobilite"],
        "sports_collectifs" => &["cardio", "cross_training", "renforcement_musculaire"],
        _ => &[],
    }
}

/// Equipment tags that name the same thing collapse to one canonical tag
fn canonical_equipment(tag: &str) -> &str {
    match tag {
        "barre_de_traction" => "barre",
        other => other,
    }
}

/// Non-negative relevance of one exercise for one needs record.
/// Unmatched terms contribute 0; the final result is clamped to 0.
pub fn score_exercise(exercise: &Exercise, needs: &ExtractedNeeds) -> f64 {
    let mut score = 0.0;

    if !needs.objectifs.is_empty() {
        let match_count = needs
            .objectifs
            .iter()
            .filter(|o| exercise.objectifs_cibles.contains(o))
            .count() as f64;
        let match_ratio = match_count / needs.objectifs.len() as f64;
        score += match_count * W_OBJECTIFS + match_ratio * W_OBJECTIFS * 0.5;
    }

    if needs.niveau == Some(exercise.niveau) {
        score += W_NIVEAU;
    } else {
        // Unknown user level counts as intermediate for the distance
        let user_ord = needs.niveau.map_or(2, |n| n.ordinal());
        let diff = user_ord.abs_diff(exercise.niveau.ordinal());
        if diff == 1 {
            score += W_NIVEAU * 0.3;
        }
    }

    if exercise.materiel.is_empty() {
        score += W_MATERIEL;
    } else {
        let available: Vec<&str> = needs.materiel.iter().map(|m| canonical_equipment(m)).collect();
        let covered = exercise
            .materiel
            .iter()
            .filter(|m| available.contains(&m.as_str()))
            .count();
        let ratio = covered as f64 / exercise.materiel.len() as f64;
        if ratio == 1.0 {
            score += W_MATERIEL;
        } else if ratio >= 0.5 {
            score += W_MATERIEL * 0.5;
        }
    }

    if !needs.preferences.is_empty() {
        let match_count = needs
            .preferences
            .iter()
            .filter(|p| exercise.categories.contains(p))
            .count() as f64;
        score += match_count * W_PREFERENCES;
    }

    if !needs.sports.is_empty() {
        let mut relevant: Vec<&str> = needs
            .sports
            .iter()
            .flat_map(|s| sport_categories(s).iter().copied())
            .collect();
        relevant.sort_unstable();
        relevant.dedup();
        let match_count = relevant
            .iter()
            .filter(|c| exercise.categories.iter().any(|cat| cat == *c))
            .count();
        if match_count > 0 {
            score += match_count as f64 * SPORT_AFFINITY_BONUS;
        }
    }

    match needs.frequence {
        Frequence::Zero | Frequence::One => {
            if exercise.niveau == Niveau::Debutant {
                score += 2.0;
            }
        }
        Frequence::FourPlus => {
            if matches!(exercise.niveau, Niveau::Intermediaire | Niveau::Avance) {
                score += 1.5;
            }
        }
        Frequence::TwoThree => {}
    }

    if needs.age.is_some_and(|age| age > 50) {
        if exercise.categories.iter().any(|c| c == "yoga_mobilite")
            || exercise.niveau == Niveau::Debutant
        {
            score += 1.0;
        }
        if exercise.categories.iter().any(|c| c == "cardio") && exercise.niveau == Niveau::Avance {
            score -= 1.0;
        }
    }

    score.max(0.0)
}

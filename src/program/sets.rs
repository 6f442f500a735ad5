//! Set/rep/rest derivation per exercise, level, frequency and age

use serde::{Deserialize, Serialize};

use crate::exercises::Niveau;
use crate::profile::Frequence;
use crate::recommend::ScoredExercise;

/// Name fragments marking hold-type exercises
const ISOMETRIC_MARKERS: &[&str] = &["plank", "wall sit", "hollow", "gainage"];

/// Repetition prescription: a count, or a "45s" hold duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Hold(String),
}

impl Reps {
    pub fn hold(seconds: u32) -> Self {
        Reps::Hold(format!("{seconds}s"))
    }

    /// Hold duration in seconds, when this is a hold prescription.
    /// Unparsable strings fall back to 30.
    pub fn hold_seconds(&self) -> Option<u32> {
        match self {
            Reps::Count(_) => None,
            Reps::Hold(s) => {
                let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
                Some(digits.parse().unwrap_or(30))
            }
        }
    }
}

impl std::fmt::Display for Reps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reps::Count(n) => write!(f, "{n}"),
            Reps::Hold(s) => write!(f, "{s}"),
        }
    }
}

/// Prescription for one exercise within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    pub sets: u32,
    pub reps: Reps,
    pub rest_seconds: u32,
}

/// Hold-type exercises are parameterized by duration, not repetitions
pub fn is_isometric(name: &str) -> bool {
    let lower = name.to_lowercase();
    ISOMETRIC_MARKERS.iter().any(|m| lower.contains(m))
}

/// Derive sets, reps and rest. Pure and deterministic.
pub fn calculate_sets_and_reps(
    exercise: &ScoredExercise,
    niveau: Option<Niveau>,
    frequence: Frequence,
    age: Option<u32>,
) -> ExerciseSet {
    let senior = age.is_some_and(|a| a > 50);

    if is_isometric(&exercise.exercise.name) {
        let mut duration = match niveau {
            Some(Niveau::Debutant) => 20,
            Some(Niveau::Intermediaire) => 45,
            Some(Niveau::Avance) => 60,
            None => 30,
        };
        if senior {
            duration = (duration - 10).max(15);
        }
        let sets = match frequence {
            Frequence::Zero => 2,
            Frequence::One => 3,
            _ => 4,
        };
        return ExerciseSet { sets, reps: Reps::hold(duration), rest_seconds: 30 };
    }

    let (mut sets, mut reps, mut rest) = match niveau {
        Some(Niveau::Debutant) => {
            let sets = if frequence == Frequence::Zero { 2 } else { 3 };
            (sets, 8, 60)
        }
        Some(Niveau::Intermediaire) => {
            let sets = match frequence {
                Frequence::Zero | Frequence::One => 3,
                _ => 4,
            };
            (sets, 12, 45)
        }
        Some(Niveau::Avance) => {
            let sets = match frequence {
                Frequence::Zero => 3,
                Frequence::One => 4,
                _ => 5,
            };
            (sets, 15, 30)
        }
        None => (2, 8, 45),
    };

    if senior {
        sets = (sets - 1).max(2);
        reps = (reps - 2).max(6);
        rest += 15;
    }

    // Cardio overrides rep count and rest, after the age adjustment
    if exercise.exercise.categories.iter().any(|c| c == "cardio") {
        reps = 20;
        rest = 30;
    }

    ExerciseSet { sets, reps: Reps::Count(reps), rest_seconds: rest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::Exercise;

    fn scored(name: &str, categories: &[&str]) -> ScoredExercise {
        ScoredExercise {
            exercise: Exercise {
                id: name.to_string(),
                name: name.to_string(),
                categories: categories.iter().map(|s| s.to_string()).collect(),
                objectifs_cibles: vec![],
                materiel: vec![],
                niveau: Niveau::Debutant,
                contre_indications: vec![],
                description: String::new(),
            },
            score: 1.0,
        }
    }

    #[test]
    fn test_isometric_detection() {
        assert!(is_isometric("Gainage ventral"));
        assert!(is_isometric("Plank"));
        assert!(is_isometric("Wall sit contre le mur"));
        assert!(is_isometric("Hollow hold"));
        assert!(!is_isometric("Pompes"));
    }

    #[test]
    fn test_beginner_dynamic_low_frequency() {
        let set = calculate_sets_and_reps(
            &scored("Pompes", &[]),
            Some(Niveau::Debutant),
            Frequence::Zero,
            Some(30),
        );
        assert_eq!(set, ExerciseSet { sets: 2, reps: Reps::Count(8), rest_seconds: 60 });
    }

    #[test]
    fn test_beginner_dynamic_regular_frequency() {
        let set = calculate_sets_and_reps(
            &scored("Pompes", &[]),
            Some(Niveau::Debutant),
            Frequence::TwoThree,
            None,
        );
        assert_eq!(set.sets, 3);
        assert_eq!(set.reps, Reps::Count(8));
    }

    #[test]
    fn test_advanced_dynamic_by_frequency() {
        let ex = scored("Pompes", &[]);
        let zero = calculate_sets_and_reps(&ex, Some(Niveau::Avance), Frequence::Zero, None);
        let one = calculate_sets_and_reps(&ex, Some(Niveau::Avance), Frequence::One, None);
        let four = calculate_sets_and_reps(&ex, Some(Niveau::Avance), Frequence::FourPlus, None);
        assert_eq!((zero.sets, one.sets, four.sets), (3, 4, 5));
        assert_eq!(zero.reps, Reps::Count(15));
        assert_eq!(zero.rest_seconds, 30);
    }

    #[test]
    fn test_unknown_level_defaults() {
        let set = calculate_sets_and_reps(&scored("Pompes", &[]), None, Frequence::TwoThree, None);
        assert_eq!(set, ExerciseSet { sets: 2, reps: Reps::Count(8), rest_seconds: 45 });
    }

    #[test]
    fn test_age_adjustment_dynamic() {
        let set = calculate_sets_and_reps(
            &scored("Pompes", &[]),
            Some(Niveau::Intermediaire),
            Frequence::TwoThree,
            Some(55),
        );
        // 4 sets -> 3, 12 reps -> 10, 45s rest -> 60s
        assert_eq!(set, ExerciseSet { sets: 3, reps: Reps::Count(10), rest_seconds: 60 });
    }

    #[test]
    fn test_age_adjustment_floors() {
        let set = calculate_sets_and_reps(
            &scored("Pompes", &[]),
            Some(Niveau::Debutant),
            Frequence::Zero,
            Some(60),
        );
        // 2 sets floored at 2, 8 reps -> 6
        assert_eq!(set.sets, 2);
        assert_eq!(set.reps, Reps::Count(6));
        assert_eq!(set.rest_seconds, 75);
    }

    #[test]
    fn test_cardio_override_after_age() {
        let set = calculate_sets_and_reps(
            &scored("Burpees", &["cardio"]),
            Some(Niveau::Avance),
            Frequence::FourPlus,
            Some(55),
        );
        assert_eq!(set.reps, Reps::Count(20));
        assert_eq!(set.rest_seconds, 30);
        assert_eq!(set.sets, 4); // 5 reduced by age
    }

    #[test]
    fn test_isometric_by_level() {
        let ex = scored("Gainage ventral", &[]);
        let deb = calculate_sets_and_reps(&ex, Some(Niveau::Debutant), Frequence::Zero, None);
        let int = calculate_sets_and_reps(&ex, Some(Niveau::Intermediaire), Frequence::One, None);
        let ava = calculate_sets_and_reps(&ex, Some(Niveau::Avance), Frequence::TwoThree, None);
        let inc = calculate_sets_and_reps(&ex, None, Frequence::FourPlus, None);
        assert_eq!(deb, ExerciseSet { sets: 2, reps: Reps::hold(20), rest_seconds: 30 });
        assert_eq!(int, ExerciseSet { sets: 3, reps: Reps::hold(45), rest_seconds: 30 });
        assert_eq!(ava, ExerciseSet { sets: 4, reps: Reps::hold(60), rest_seconds: 30 });
        assert_eq!(inc.reps, Reps::hold(30));
    }

    #[test]
    fn test_isometric_age_floor() {
        let ex = scored("Gainage ventral", &[]);
        let set = calculate_sets_and_reps(&ex, Some(Niveau::Debutant), Frequence::Zero, Some(55));
        // 20 - 10 = 10, floored at 15
        assert_eq!(set.reps, Reps::hold(15));
    }

    #[test]
    fn test_deterministic() {
        let ex = scored("Pompes", &["cardio"]);
        let a = calculate_sets_and_reps(&ex, Some(Niveau::Avance), Frequence::One, Some(52));
        let b = calculate_sets_and_reps(&ex, Some(Niveau::Avance), Frequence::One, Some(52));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reps_serde_shapes() {
        assert_eq!(serde_json::to_string(&Reps::Count(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&Reps::hold(45)).unwrap(), "\"45s\"");
        let count: Reps = serde_json::from_str("8").unwrap();
        assert_eq!(count, Reps::Count(8));
        let hold: Reps = serde_json::from_str("\"30s\"").unwrap();
        assert_eq!(hold.hold_seconds(), Some(30));
    }

    #[test]
    fn test_hold_seconds_unparsable_defaults() {
        assert_eq!(Reps::Hold("longtemps".to_string()).hold_seconds(), Some(30));
        assert_eq!(Reps::Count(10).hold_seconds(), None);
    }
}

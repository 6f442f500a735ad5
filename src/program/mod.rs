//! Weekly program construction - day distribution, prescriptions, assembly

pub mod duration;
pub mod sets;
pub mod stats;

pub use duration::estimate_session_minutes;
pub use sets::{ExerciseSet, Reps, calculate_sets_and_reps};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::exercises::Niveau;
use crate::profile::{Frequence, SportProfile};
use crate::recommend::ScoredExercise;

/// Exercise placed in the week with its prescription
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammedExercise {
    #[serde(flatten)]
    pub exercise: ScoredExercise,
    pub sets: ExerciseSet,
    /// 0 = lundi .. 6 = dimanche
    pub day_of_week: u8,
    /// Position within the day, contiguous from 0
    pub order: u32,
}

/// Fully parameterized week of training
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgram {
    pub exercises: Vec<ProgrammedExercise>,
    /// Sum of estimated session durations, in minutes
    pub total_duration: u32,
    pub days_per_week: u32,
}

/// Active training days (0 = Monday) per requested frequency.
/// Policy table: Monday/Thursday as the base pair, then Tuesday, Friday,
/// Wednesday as frequency grows. A future version may make this configurable.
pub fn active_days(frequence: Frequence) -> &'static [u8] {
    match frequence {
        Frequence::Zero => &[0, 3],
        Frequence::One => &[0, 3, 1],
        Frequence::TwoThree => &[0, 3, 1, 4],
        Frequence::FourPlus => &[0, 3, 1, 4, 2],
    }
}

pub fn day_name(day: u8) -> &'static str {
    match day {
        0 => "lundi",
        1 => "mardi",
        2 => "mercredi",
        3 => "jeudi",
        4 => "vendredi",
        5 => "samedi",
        _ => "dimanche",
    }
}

/// Round-robin assignment of the shortlist over the active days,
/// in shortlist order. Days that receive nothing are dropped.
fn distribute(
    exercises: &[ScoredExercise],
    frequence: Frequence,
) -> Vec<(u8, Vec<&ScoredExercise>)> {
    let days = active_days(frequence);
    let mut groups: Vec<(u8, Vec<&ScoredExercise>)> =
        days.iter().map(|d| (*d, Vec::new())).collect();

    for (index, exercise) in exercises.iter().enumerate() {
        groups[index % days.len()].1.push(exercise);
    }

    groups.retain(|(_, group)| !group.is_empty());
    groups
}

/// Assemble the weekly program from a non-empty shortlist and the profile.
/// Sparse profiles fall back to debutant level and zero frequency.
pub fn create_weekly_program(
    shortlist: &[ScoredExercise],
    profile: &SportProfile,
) -> WeeklyProgram {
    let niveau = profile.identite.niveau_de_base.unwrap_or(Niveau::Debutant);
    let frequence = profile.habitudes.frequence_par_semaine.unwrap_or_default();
    let age = profile.identite.age;

    let groups = distribute(shortlist, frequence);
    let mut exercises = Vec::new();
    let mut total_duration = 0;

    for (day_of_week, group) in &groups {
        let day_exercises: Vec<ProgrammedExercise> = group
            .iter()
            .enumerate()
            .map(|(order, exercise)| ProgrammedExercise {
                exercise: (*exercise).clone(),
                sets: calculate_sets_and_reps(exercise, Some(niveau), frequence, age),
                day_of_week: *day_of_week,
                order: order as u32,
            })
            .collect();
        total_duration += estimate_session_minutes(&day_exercises);
        exercises.extend(day_exercises);
    }

    debug!(
        days = groups.len(),
        total_duration, "programme hebdomadaire assemblé"
    );

    WeeklyProgram {
        exercises,
        total_duration,
        days_per_week: groups.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::Exercise;
    use std::collections::HashMap;

    fn shortlist(count: usize) -> Vec<ScoredExercise> {
        (0..count)
            .map(|i| ScoredExercise {
                exercise: Exercise {
                    id: format!("ex{i}"),
                    name: format!("Exercice {i}"),
                    categories: vec![],
                    objectifs_cibles: vec![],
                    materiel: vec![],
                    niveau: Niveau::Debutant,
                    contre_indications: vec![],
                    description: String::new(),
                },
                score: 5.0 - i as f64 * 0.5,
            })
            .collect()
    }

    fn profile(frequence: Frequence) -> SportProfile {
        let mut profile = SportProfile::default();
        profile.identite.niveau_de_base = Some(Niveau::Debutant);
        profile.habitudes.frequence_par_semaine = Some(frequence);
        profile
    }

    #[test]
    fn test_day_count_per_frequency() {
        let list = shortlist(5);
        for (frequence, expected) in [
            (Frequence::Zero, 2),
            (Frequence::One, 3),
            (Frequence::TwoThree, 4),
            (Frequence::FourPlus, 5),
        ] {
            let program = create_weekly_program(&list, &profile(frequence));
            assert_eq!(program.days_per_week, expected, "frequence {frequence:?}");
        }
    }

    #[test]
    fn test_days_layer_additively() {
        assert_eq!(active_days(Frequence::Zero), &[0, 3]);
        assert_eq!(active_days(Frequence::One), &[0, 3, 1]);
        assert_eq!(active_days(Frequence::TwoThree), &[0, 3, 1, 4]);
        assert_eq!(active_days(Frequence::FourPlus), &[0, 3, 1, 4, 2]);
    }

    #[test]
    fn test_every_exercise_on_exactly_one_day() {
        let list = shortlist(5);
        let program = create_weekly_program(&list, &profile(Frequence::One));
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for exercise in &program.exercises {
            *seen.entry(exercise.exercise.exercise.id.as_str()).or_default() += 1;
        }
        assert_eq!(seen.len(), 5);
        assert!(seen.values().all(|&count| count == 1));
    }

    #[test]
    fn test_day_indices_within_active_set() {
        let list = shortlist(5);
        let program = create_weekly_program(&list, &profile(Frequence::TwoThree));
        let days = active_days(Frequence::TwoThree);
        assert!(program.exercises.iter().all(|e| days.contains(&e.day_of_week)));
    }

    #[test]
    fn test_order_contiguous_within_day() {
        let list = shortlist(5);
        let program = create_weekly_program(&list, &profile(Frequence::Zero));
        let mut by_day: HashMap<u8, Vec<u32>> = HashMap::new();
        for exercise in &program.exercises {
            by_day.entry(exercise.day_of_week).or_default().push(exercise.order);
        }
        for orders in by_day.values() {
            let expected: Vec<u32> = (0..orders.len() as u32).collect();
            assert_eq!(*orders, expected);
        }
    }

    #[test]
    fn test_round_robin_follows_shortlist_order() {
        let list = shortlist(5);
        let program = create_weekly_program(&list, &profile(Frequence::Zero));
        // days [0, 3]: ex0/ex2/ex4 on Monday, ex1/ex3 on Thursday
        let monday: Vec<&str> = program
            .exercises
            .iter()
            .filter(|e| e.day_of_week == 0)
            .map(|e| e.exercise.exercise.id.as_str())
            .collect();
        assert_eq!(monday, vec!["ex0", "ex2", "ex4"]);
    }

    #[test]
    fn test_fewer_exercises_than_days() {
        let list = shortlist(3);
        let program = create_weekly_program(&list, &profile(Frequence::FourPlus));
        // Only the first three active days receive anything
        assert_eq!(program.days_per_week, 3);
    }

    #[test]
    fn test_scenario_a_single_beginner_exercise() {
        let mut list = shortlist(1);
        list[0].exercise.objectifs_cibles = vec!["renforcement_musculaire".to_string()];
        let mut profile = profile(Frequence::Zero);
        profile.identite.age = Some(30);

        let program = create_weekly_program(&list, &profile);
        assert_eq!(program.exercises.len(), 1);
        let programmed = &program.exercises[0];
        assert_eq!(programmed.day_of_week, 0);
        assert_eq!(programmed.sets.sets, 2);
        assert_eq!(programmed.sets.reps, Reps::Count(8));
    }

    #[test]
    fn test_total_duration_sums_sessions() {
        let list = shortlist(2);
        let program = create_weekly_program(&list, &profile(Frequence::Zero));
        // One exercise per day, identical prescriptions: both sessions equal
        // 2 sets * 8 reps * 2s + 1 * 60s rest + 480s = 572s -> 10min each
        assert_eq!(program.total_duration, 20);
    }

    #[test]
    fn test_json_round_trip_preserves_assignment() {
        let list = shortlist(5);
        let program = create_weekly_program(&list, &profile(Frequence::TwoThree));
        let json = serde_json::to_string(&program).unwrap();
        let back: WeeklyProgram = serde_json::from_str(&json).unwrap();
        assert_eq!(back.exercises.len(), program.exercises.len());
        for (a, b) in program.exercises.iter().zip(back.exercises.iter()) {
            assert_eq!(a.day_of_week, b.day_of_week);
            assert_eq!(a.order, b.order);
            assert_eq!(a.sets, b.sets);
            assert_eq!(a.exercise.exercise.id, b.exercise.exercise.id);
        }
        assert_eq!(back.total_duration, program.total_duration);
        assert_eq!(back.days_per_week, program.days_per_week);
    }

    #[test]
    fn test_wire_field_names() {
        let list = shortlist(1);
        let program = create_weekly_program(&list, &profile(Frequence::Zero));
        let value = serde_json::to_value(&program).unwrap();
        assert!(value.get("totalDuration").is_some());
        assert!(value.get("daysPerWeek").is_some());
        let first = &value["exercises"][0];
        assert!(first.get("dayOfWeek").is_some());
        assert!(first["sets"].get("restSeconds").is_some());
    }
}

//! Session duration estimate from a day's parameterized exercises

use super::ProgrammedExercise;
use super::sets::Reps;

/// Seconds per dynamic repetition
const SECONDS_PER_REP: u32 = 2;
/// Transition between consecutive exercises
const TRANSITION_SECONDS: u32 = 30;
/// Warm-up and cool-down allowance per session
const WARMUP_COOLDOWN_SECONDS: u32 = 480;

/// Estimated session length in minutes, rounded up.
/// An empty session is the 8-minute warm-up/cool-down alone.
pub fn estimate_session_minutes(exercises: &[ProgrammedExercise]) -> u32 {
    let mut total_seconds = WARMUP_COOLDOWN_SECONDS;

    for (index, exercise) in exercises.iter().enumerate() {
        let ExerciseTime { work, rest } = exercise_time(exercise);
        total_seconds += work + rest;
        if index < exercises.len() - 1 {
            total_seconds += TRANSITION_SECONDS;
        }
    }

    total_seconds.div_ceil(60)
}

struct ExerciseTime {
    work: u32,
    rest: u32,
}

fn exercise_time(exercise: &ProgrammedExercise) -> ExerciseTime {
    let prescription = &exercise.sets;
    let work = match &prescription.reps {
        Reps::Count(reps) => prescription.sets * reps * SECONDS_PER_REP,
        hold @ Reps::Hold(_) => prescription.sets * hold.hold_seconds().unwrap_or(30),
    };
    // No rest after the last set
    let rest = prescription.sets.saturating_sub(1) * prescription.rest_seconds;
    ExerciseTime { work, rest }
}

//! Aggregate statistics over a weekly program

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::WeeklyProgram;

/// Summary figures for display and export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramStats {
    pub total_exercises: usize,
    /// Minutes over the whole week
    pub total_duration: u32,
    pub exercises_by_category: BTreeMap<String, u32>,
    pub exercises_by_day: BTreeMap<u8, u32>,
    /// Mean difficulty ordinal (debutant 1 .. avance 3)
    pub average_difficulty: f64,
    pub equipment_needed: Vec<String>,
    pub days_per_week: u32,
}

pub fn calculate_program_stats(program: &WeeklyProgram) -> ProgramStats {
    let mut by_category: BTreeMap<String, u32> = BTreeMap::new();
    let mut by_day: BTreeMap<u8, u32> = BTreeMap::new();
    let mut equipment: Vec<String> = Vec::new();
    let mut total_difficulty = 0u32;

    for programmed in &program.exercises {
        let exercise = &programmed.exercise.exercise;
        for category in &exercise.categories {
            *by_category.entry(category.clone()).or_default() += 1;
        }
        *by_day.entry(programmed.day_of_week).or_default() += 1;
        total_difficulty += u32::from(exercise.niveau.ordinal());
        for item in &exercise.materiel {
            if !equipment.contains(item) {
                equipment.push(item.clone());
            }
        }
    }

    let average_difficulty = if program.exercises.is_empty() {
        0.0
    } else {
        f64::from(total_difficulty) / program.exercises.len() as f64
    };

    ProgramStats {
        total_exercises: program.exercises.len(),
        total_duration: program.total_duration,
        exercises_by_category: by_category,
        exercises_by_day: by_day,
        average_difficulty,
        equipment_needed: equipment,
        days_per_week: program.days_per_week,
    }
}

/// Renders minutes as "XhYmin", e.g. 65 -> "1h5min"
pub fn format_duration(minutes: u32) -> String {
    format!("{}h{}min", minutes / 60, minutes % 60)
}

pub fn difficulty_label(average: f64) -> &'static str {
    if average < 1.5 {
        "Débutant"
    } else if average < 2.5 {
        "Intermédiaire"
    } else {
        "Avancé"
    }
}

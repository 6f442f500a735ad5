//! Program export - JSON, plain text, file naming, share links

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::profile::SportProfile;
use crate::program::{WeeklyProgram, day_name};
use crate::recommend::ScoredExercise;

const EXPORT_VERSION: &str = "1.0";

/// JSON export of a shortlist with the profile it was derived from
pub fn export_program_to_json(
    suggestions: &[ScoredExercise],
    profile: Option<&SportProfile>,
) -> Result<String> {
    let export = json!({
        "profile": profile,
        "exercises": suggestions,
        "generatedAt": Utc::now().to_rfc3339(),
        "version": EXPORT_VERSION,
    });
    serde_json::to_string_pretty(&export).context("export JSON du programme")
}

/// Extract the "Muscles sollicités ... ." sentence from a description
fn muscles_fragment(description: &str) -> &str {
    let Some(start) = description.find("Muscles sollicités") else {
        return "Non spécifié";
    };
    let rest = &description[start..];
    match rest.find('.') {
        Some(end) => &rest[..=end],
        None => rest,
    }
}

/// Human-readable rendering of the ranked shortlist
pub fn format_program_as_text(
    suggestions: &[ScoredExercise],
    profile: Option<&SportProfile>,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    let rule = "=".repeat(60);
    let thin = "-".repeat(60);

    lines.push(rule.clone());
    lines.push("PROGRAMME SPORTIF PERSONNALISÉ".to_string());
    lines.push(rule.clone());
    lines.push(String::new());
    lines.push(format!("Généré le : {}", Local::now().format("%d/%m/%Y %H:%M")));
    lines.push(String::new());

    if let Some(profile) = profile {
        lines.push("VOTRE PROFIL".to_string());
        lines.push(thin.clone());
        if let Some(niveau) = profile.identite.niveau_de_base {
            lines.push(format!("Niveau : {}", niveau.label()));
        }
        if let Some(age) = profile.identite.age {
            lines.push(format!("Âge : {age} ans"));
        }
        if !profile.objectifs.is_empty() {
            lines.push(format!("Objectifs : {}", profile.objectifs.join(", ")));
        }
        lines.push(String::new());
    }

    lines.push("EXERCICES RECOMMANDÉS".to_string());
    lines.push(thin);
    lines.push(String::new());

    for (index, scored) in suggestions.iter().enumerate() {
        let exercise = &scored.exercise;
        lines.push(format!("{}. {}", index + 1, exercise.name.to_uppercase()));
        lines.push(format!("   Niveau : {}", exercise.niveau.label()));
        lines.push(format!("   Score de pertinence : {:.1}", scored.score));
        lines.push(format!("   Description : {}", exercise.description));
        lines.push(format!("   Muscles sollicités : {}", muscles_fragment(&exercise.description)));
        lines.push(String::new());
    }

    lines.push("=".repeat(60));
    lines.push("Bon entraînement !".to_string());

    lines.join("\n")
}

/// Per-day rendering of the assembled weekly program
pub fn format_weekly_program_as_text(program: &WeeklyProgram) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "Programme sur {} jour(s), durée totale estimée : {} min",
        program.days_per_week, program.total_duration
    ));

    let mut current_day: Option<u8> = None;
    for programmed in &program.exercises {
        if current_day != Some(programmed.day_of_week) {
            current_day = Some(programmed.day_of_week);
            lines.push(String::new());
            lines.push(format!("— {} —", day_name(programmed.day_of_week)));
        }
        let sets = &programmed.sets;
        lines.push(format!(
            "  {}. {} : {} x {} (repos {}s)",
            programmed.order + 1,
            programmed.exercise.exercise.name,
            sets.sets,
            sets.reps,
            sets.rest_seconds,
        ));
    }

    lines.join("\n")
}

/// Dated default file name, e.g. programme-sportif-2026-08-29.json
pub fn export_file_name(extension: &str) -> PathBuf {
    PathBuf::from(format!("programme-sportif-{}.{extension}", Local::now().format("%Y-%m-%d")))
}

#[derive(Debug, Serialize, Deserialize)]
struct SharePayload {
    profile: Option<SportProfile>,
    #[serde(rename = "exerciseIds")]
    exercise_ids: Vec<String>,
    timestamp: i64,
}

/// Base64-encoded share link carrying the profile and the shortlist ids
pub fn generate_share_link(
    base_url: &str,
    suggestions: &[ScoredExercise],
    profile: Option<&SportProfile>,
) -> Result<String> {
    let payload = SharePayload {
        profile: profile.cloned(),
        exercise_ids: suggestions.iter().map(|s| s.exercise.id.clone()).collect(),
        timestamp: Utc::now().timestamp_millis(),
    };
    let json = serde_json::to_string(&payload).context("encodage du lien de partage")?;
    Ok(format!("{base_url}?share={}", BASE64.encode(json)))
}

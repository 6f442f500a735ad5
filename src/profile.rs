//! User profile - the questionnaire answers the recommendation pipeline consumes

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::exercises::Niveau;

/// Requested training frequency per week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Frequence {
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2_3")]
    TwoThree,
    #[serde(rename = "4_plus")]
    FourPlus,
}

impl Frequence {
    pub fn label(&self) -> &'static str {
        match self {
            Frequence::Zero => "jamais",
            Frequence::One => "1 fois par semaine",
            Frequence::TwoThree => "2 à 3 fois par semaine",
            Frequence::FourPlus => "4 fois ou plus par semaine",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identite {
    #[serde(default)]
    pub niveau_de_base: Option<Niveau>,
    #[serde(default)]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Habitudes {
    #[serde(default)]
    pub frequence_par_semaine: Option<Frequence>,
    #[serde(default)]
    pub sports_pratiques: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanteContraintes {
    #[serde(default)]
    pub douleurs_actuelles: Vec<String>,
    #[serde(default)]
    pub limitations_mobilite: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub type_exercice_prefere: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsentementLegal {
    #[serde(default)]
    pub acceptance_disclaimer: bool,
}

/// Full questionnaire profile. Owned by the caller, never mutated by the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SportProfile {
    #[serde(default)]
    pub identite: Identite,
    #[serde(default)]
    pub habitudes: Habitudes,
    #[serde(default)]
    pub objectifs: Vec<String>,
    #[serde(default)]
    pub sante_contraintes: SanteContraintes,
    #[serde(default)]
    pub materiel_disponible: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub consentement_legal: ConsentementLegal,
}

/// Load a profile from a JSON file
pub fn load_profile(path: &Path) -> Result<SportProfile> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("lecture du profil {}", path.display()))?;
    let profile: SportProfile = serde_json::from_str(&data)
        .with_context(|| format!("profil invalide {}", path.display()))?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequence_serde_names() {
        assert_eq!(serde_json::to_string(&Frequence::TwoThree).unwrap(), "\"2_3\"");
        let f: Frequence = serde_json::from_str("\"4_plus\"").unwrap();
        assert_eq!(f, Frequence::FourPlus);
    }

    #[test]
    fn test_empty_profile_deserializes() {
        let profile: SportProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.identite.niveau_de_base.is_none());
        assert!(profile.objectifs.is_empty());
        assert!(profile.habitudes.frequence_par_semaine.is_none());
    }

    #[test]
    fn test_full_profile_round_trip() {
        let json = r#"{
            "identite": {"niveau_de_base": "debutant", "age": 30},
            "habitudes": {"frequence_par_semaine": "2_3", "sports_pratiques": ["course"]},
            "objectifs": ["renforcement_musculaire"],
            "sante_contraintes": {"douleurs_actuelles": ["epaule"], "limitations_mobilite": []},
            "materiel_disponible": ["tapis"],
            "preferences": {"type_exercice_prefere": ["cardio"]},
            "consentement_legal": {"acceptance_disclaimer": true}
        }"#;
        let profile: SportProfile = serde_json::from_str(json).unwrap();
        let back: SportProfile =
            serde_json::from_str(&serde_json::to_string(&profile).unwrap()).unwrap();
        assert_eq!(back.identite.age, Some(30));
        assert_eq!(back.habitudes.frequence_par_semaine, Some(Frequence::TwoThree));
        assert_eq!(back.sante_contraintes.douleurs_actuelles, vec!["epaule"]);
    }
}

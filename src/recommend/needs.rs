//! Profile normalization - strips questionnaire sentinels into a needs record

use crate::exercises::Niveau;
use crate::profile::{Frequence, SportProfile};

/// Normalized view of a profile, the only shape scoring and distribution see
#[derive(Debug, Clone)]
pub struct ExtractedNeeds {
    pub niveau: Option<Niveau>,
    pub age: Option<u32>,
    pub objectifs: Vec<String>,
    pub douleurs: Vec<String>,
    pub limitations: Vec<String>,
    pub materiel: Vec<String>,
    pub preferences: Vec<String>,
    pub sports: Vec<String>,
    pub frequence: Frequence,
}

fn strip_sentinel(values: &[String], sentinel: &str) -> Vec<String> {
    values.iter().filter(|v| *v != sentinel).cloned().collect()
}

/// Total over any well-typed profile: missing scalars become defaults,
/// "aucune"/"aucun" markers are dropped from the multi-value fields.
pub fn extract_needs(profile: &SportProfile) -> ExtractedNeeds {
    ExtractedNeeds {
        niveau: profile.identite.niveau_de_base,
        age: profile.identite.age,
        objectifs: profile.objectifs.clone(),
        douleurs: strip_sentinel(&profile.sante_contraintes.douleurs_actuelles, "aucune"),
        limitations: strip_sentinel(&profile.sante_contraintes.limitations_mobilite, "aucune"),
        materiel: strip_sentinel(&profile.materiel_disponible, "aucun"),
        preferences: profile.preferences.type_exercice_prefere.clone(),
        sports: strip_sentinel(&profile.habitudes.sports_pratiques, "aucun"),
        frequence: profile.habitudes.frequence_par_semaine.unwrap_or_default(),
    }
}

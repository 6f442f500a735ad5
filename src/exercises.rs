//! Exercise catalog - types, built-in exercises, JSON loading

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Difficulty level, ordered debutant < intermediaire < avance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Niveau {
    Debutant,
    Intermediaire,
    Avance,
}

impl Niveau {
    /// Ordinal position used for level-distance scoring and difficulty averages
    pub fn ordinal(&self) -> u8 {
        match self {
            Niveau::Debutant => 1,
            Niveau::Intermediaire => 2,
            Niveau::Avance => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Niveau::Debutant => "Débutant",
            Niveau::Intermediaire => "Intermédiaire",
            Niveau::Avance => "Avancé",
        }
    }
}

/// Catalog entry. The catalog is loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub objectifs_cibles: Vec<String>,
    #[serde(default)]
    pub materiel: Vec<String>,
    pub niveau: Niveau,
    #[serde(default)]
    pub contre_indications: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Load a catalog from a JSON file (array of exercises)
pub fn load_catalog(path: &Path) -> Result<Vec<Exercise>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("lecture du catalogue {}", path.display()))?;
    let catalog: Vec<Exercise> = serde_json::from_str(&data)
        .with_context(|| format!("catalogue invalide {}", path.display()))?;
    Ok(catalog)
}

pub fn find_exercise<'a>(catalog: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
    catalog.iter().find(|e| e.id == id)
}

fn ex(
    id: &str,
    name: &str,
    categories: &[&str],
    objectifs: &[&str],
    materiel: &[&str],
    niveau: Niveau,
    contre_indications: &[&str],
    description: &str,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        objectifs_cibles: objectifs.iter().map(|s| s.to_string()).collect(),
        materiel: materiel.iter().map(|s| s.to_string()).collect(),
        niveau,
        contre_indications: contre_indications.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}

/// Built-in bodyweight-oriented catalog, used when no catalog file is given
pub fn builtin_catalog() -> Vec<Exercise> {
    vec![
        ex(
            "pompes",
            "Pompes",
            &["renforcement_musculaire", "poids_du_corps"],
            &["renforcement_musculaire"],
            &[],
            Niveau::Debutant,
            &["epaule", "poignet"],
            "Mains au sol à largeur d'épaules, corps gainé, descendez la poitrine \
             vers le sol puis poussez. Muscles sollicités : pectoraux, triceps, épaules. \
             Inspirez en descendant, expirez en poussant.",
        ),
        ex(
            "squats",
            "Squats",
            &["renforcement_musculaire", "poids_du_corps"],
            &["renforcement_musculaire", "perte_de_poids"],
            &[],
            Niveau::Debutant,
            &["genou"],
            "Pieds à largeur de hanches, descendez comme pour vous asseoir, dos droit. \
             Muscles sollicités : quadriceps, fessiers, ischio-jambiers. \
             Inspirez en descendant, expirez en remontant.",
        ),
        ex(
            "gainage_ventral",
            "Gainage ventral",
            &["renforcement_musculaire", "poids_du_corps"],
            &["renforcement_musculaire", "bien_etre"],
            &["tapis"],
            Niveau::Debutant,
            &["epaule", "dos"],
            "En appui sur les avant-bras et les pointes de pieds, corps aligné. \
             Muscles sollicités : abdominaux profonds, lombaires, épaules. \
             Respirez lentement sans bloquer.",
        ),
        ex(
            "gainage_lateral",
            "Gainage latéral",
            &["renforcement_musculaire", "poids_du_corps"],
            &["renforcement_musculaire"],
            &["tapis"],
            Niveau::Intermediaire,
            &["epaule"],
            "Sur le côté en appui sur un avant-bras, bassin levé, corps aligné. \
             Muscles sollicités : obliques, abdominaux, épaule d'appui. \
             Respirez régulièrement pendant le maintien.",
        ),
        ex(
            "fentes",
            "Fentes avant",
            &["renforcement_musculaire", "poids_du_corps"],
            &["renforcement_musculaire", "mobilite"],
            &[],
            Niveau::Intermediaire,
            &["genou", "hanche"],
            "Grand pas en avant, genou arrière vers le sol, buste droit, puis revenez. \
             Muscles sollicités : quadriceps, fessiers, mollets. \
             Inspirez en descendant, expirez en remontant.",
        ),
        ex(
            "burpees",
            "Burpees",
            &["cardio", "cross_training", "poids_du_corps"],
            &["perte_de_poids", "endurance"],
            &[],
            Niveau::Avance,
            &["genou", "poignet", "dos"],
            "Enchaînez squat, planche, pompe et saut vertical. \
             Muscles sollicités : corps entier. \
             Expirez sur l'effort, gardez un rythme régulier.",
        ),
        ex(
            "tractions",
            "Tractions",
            &["renforcement_musculaire"],
            &["renforcement_musculaire"],
            &["barre"],
            Niveau::Avance,
            &["epaule", "coude"],
            "Suspendu à la barre, tirez jusqu'à amener le menton au-dessus. \
             Muscles sollicités : dorsaux, biceps, avant-bras. \
             Expirez en tirant, inspirez en descendant.",
        ),
        ex(
            "mountain_climbers",
            "Mountain climbers",
            &["cardio", "cross_training"],
            &["perte_de_poids", "endurance"],
            &[],
            Niveau::Intermediaire,
            &["poignet", "hanche"],
            "En position de planche haute, ramenez les genoux vers la poitrine en alternance. \
             Muscles sollicités : abdominaux, épaules, fléchisseurs de hanche. \
             Gardez une respiration rythmée.",
        ),
        ex(
            "jumping_jacks",
            "Jumping jacks",
            &["cardio", "endurance"],
            &["perte_de_poids", "endurance"],
            &[],
            Niveau::Debutant,
            &["genou", "cheville"],
            "Sautez en écartant jambes et bras puis revenez pieds joints. \
             Muscles sollicités : mollets, épaules, corps entier. \
             Respirez naturellement, atterrissez en souplesse.",
        ),
        ex(
            "pont_fessier",
            "Pont fessier",
            &["renforcement_musculaire", "poids_du_corps"],
            &["renforcement_musculaire", "bien_etre"],
            &["tapis"],
            Niveau::Debutant,
            &["dos"],
            "Allongé sur le dos, pieds au sol, montez le bassin en serrant les fessiers. \
             Muscles sollicités : fessiers, ischio-jambiers, lombaires. \
             Expirez en montant le bassin.",
        ),
        ex(
            "salutation_soleil",
            "Salutation au soleil",
            &["yoga_mobilite", "mobilite"],
            &["bien_etre", "mobilite"],
            &["tapis"],
            Niveau::Debutant,
            &[],
            "Enchaînement fluide de postures de yoga, du sol à l'extension debout. \
             Muscles sollicités : corps entier en étirement. \
             Synchronisez chaque mouvement avec la respiration.",
        ),
        ex(
            "dips_chaise",
            "Dips sur chaise",
            &["renforcement_musculaire", "poids_du_corps"],
            &["renforcement_musculaire"],
            &["chaise"],
            Niveau::Intermediaire,
            &["epaule", "coude"],
            "Mains sur le bord d'une chaise, jambes tendues, fléchissez les coudes. \
             Muscles sollicités : triceps, épaules, pectoraux. \
             Inspirez en descendant, expirez en poussant.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_ids_unique() {
        let catalog = builtin_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_exercise() {
        let catalog = builtin_catalog();
        assert!(find_exercise(&catalog, "pompes").is_some());
        assert!(find_exercise(&catalog, "inconnu").is_none());
    }

    #[test]
    fn test_niveau_ordinal_order() {
        assert!(Niveau::Debutant.ordinal() < Niveau::Intermediaire.ordinal());
        assert!(Niveau::Intermediaire.ordinal() < Niveau::Avance.ordinal());
    }

    #[test]
    fn test_niveau_serde_names() {
        assert_eq!(serde_json::to_string(&Niveau::Debutant).unwrap(), "\"debutant\"");
        let n: Niveau = serde_json::from_str("\"intermediaire\"").unwrap();
        assert_eq!(n, Niveau::Intermediaire);
    }

    #[test]
    fn test_exercise_deserializes_with_defaults() {
        let json = r#"{"id": "x", "name": "X", "niveau": "debutant"}"#;
        let e: Exercise = serde_json::from_str(json).unwrap();
        assert!(e.categories.is_empty());
        assert!(e.contre_indications.is_empty());
    }
}

//! hebdofit - Personalized weekly training program builder

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use hebdofit::db::Database;
use hebdofit::exercises::{Exercise, builtin_catalog, load_catalog};
use hebdofit::export;
use hebdofit::profile::{SportProfile, load_profile};
use hebdofit::program::create_weekly_program;
use hebdofit::recommend::{ScoredExercise, recommend};
use hebdofit::tui::App;

const DB_PATH: &str = "hebdofit.db";

#[derive(Parser)]
#[command(name = "hebdofit")]
#[command(author, version, about = "Générateur de programme sportif hebdomadaire")]
struct Cli {
    /// Profile JSON file (defaults to the saved profile)
    #[arg(short, long, global = true)]
    profil: Option<PathBuf>,

    /// Exercise catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long, global = true)]
    catalogue: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the ranked exercise shortlist
    Recommande,

    /// Build and show the weekly program
    Programme {
        /// Also record the program in the local history
        #[arg(long)]
        enregistrer: bool,
    },

    /// Export the shortlist to a file
    Exporte {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output path (defaults to programme-sportif-<date>.<ext>)
        #[arg(short, long)]
        sortie: Option<PathBuf>,
    },

    /// Manage the saved profile
    Profil {
        #[command(subcommand)]
        action: ProfilAction,
    },

    /// List previously generated programs
    Historique,

    /// Open the program dashboard
    Tui,
}

#[derive(Subcommand)]
enum ProfilAction {
    /// Save a profile JSON file as the active profile
    Importe { fichier: PathBuf },
    /// Show the active profile
    Affiche,
    /// Forget the active profile
    Efface,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Text,
}

fn resolve_profile(db: &Database, path: Option<&PathBuf>) -> Result<SportProfile> {
    if let Some(path) = path {
        return load_profile(path);
    }
    match db.load_profile()? {
        Some(profile) => Ok(profile),
        None => bail!("aucun profil : passez --profil <fichier> ou importez-en un (profil importe)"),
    }
}

fn resolve_catalog(path: Option<&PathBuf>) -> Result<Vec<Exercise>> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(builtin_catalog()),
    }
}

fn shortlist_or_report(profile: &SportProfile, catalog: &[Exercise]) -> Option<Vec<ScoredExercise>> {
    let shortlist = recommend(profile, catalog);
    if shortlist.is_empty() {
        println!("Aucun exercice ne correspond à votre profil.");
        return None;
    }
    Some(shortlist)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let db = Database::open(DB_PATH)?;

    match cli.command {
        Some(Commands::Recommande) => {
            let profile = resolve_profile(&db, cli.profil.as_ref())?;
            let catalog = resolve_catalog(cli.catalogue.as_ref())?;
            let Some(shortlist) = shortlist_or_report(&profile, &catalog) else {
                return Ok(());
            };
            println!("Exercices recommandés :");
            println!("{:-<60}", "");
            for (index, scored) in shortlist.iter().enumerate() {
                println!(
                    "{}. {:30} | {:13} | score {:.1}",
                    index + 1,
                    scored.exercise.name,
                    scored.exercise.niveau.label(),
                    scored.score
                );
            }
        }

        Some(Commands::Programme { enregistrer }) => {
            let profile = resolve_profile(&db, cli.profil.as_ref())?;
            let catalog = resolve_catalog(cli.catalogue.as_ref())?;
            let Some(shortlist) = shortlist_or_report(&profile, &catalog) else {
                return Ok(());
            };
            let program = create_weekly_program(&shortlist, &profile);
            println!("{}", export::format_weekly_program_as_text(&program));
            if enregistrer {
                let id = db.save_program(&program)?;
                println!("\nProgramme enregistré (id: {id})");
            }
        }

        Some(Commands::Exporte { format, sortie }) => {
            let profile = resolve_profile(&db, cli.profil.as_ref())?;
            let catalog = resolve_catalog(cli.catalogue.as_ref())?;
            let Some(shortlist) = shortlist_or_report(&profile, &catalog) else {
                return Ok(());
            };
            let (contents, path) = match format {
                ExportFormat::Json => (
                    export::export_program_to_json(&shortlist, Some(&profile))?,
                    sortie.unwrap_or_else(|| export::export_file_name("json")),
                ),
                ExportFormat::Text => (
                    export::format_program_as_text(&shortlist, Some(&profile)),
                    sortie.unwrap_or_else(|| export::export_file_name("txt")),
                ),
            };
            std::fs::write(&path, contents)?;
            println!("Programme exporté : {}", path.display());
        }

        Some(Commands::Profil { action }) => match action {
            ProfilAction::Importe { fichier } => {
                let profile = load_profile(&fichier)?;
                db.save_profile(&profile)?;
                println!("Profil importé depuis {}", fichier.display());
            }
            ProfilAction::Affiche => match db.load_profile()? {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => println!("Aucun profil enregistré."),
            },
            ProfilAction::Efface => {
                db.clear_profile()?;
                println!("Profil effacé.");
            }
        },

        Some(Commands::Historique) => {
            let programs = db.list_programs()?;
            if programs.is_empty() {
                println!("Aucun programme enregistré.");
            } else {
                println!("Programmes enregistrés :");
                println!("{:-<60}", "");
                for saved in programs {
                    println!(
                        "{} | id {:3} | {} jour(s)/semaine | ~{} min",
                        saved.created_at.format("%Y-%m-%d %H:%M"),
                        saved.id,
                        saved.days_per_week,
                        saved.total_duration
                    );
                }
            }
        }

        Some(Commands::Tui) | None => {
            let profile = resolve_profile(&db, cli.profil.as_ref())?;
            let catalog = resolve_catalog(cli.catalogue.as_ref())?;
            let Some(shortlist) = shortlist_or_report(&profile, &catalog) else {
                return Ok(());
            };
            let program = create_weekly_program(&shortlist, &profile);
            let mut app = App::new(program);
            app.run()?;
        }
    }

    Ok(())
}

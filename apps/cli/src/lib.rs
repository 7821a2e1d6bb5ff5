pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod state;
pub mod store;

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::console::Console;
use crate::state::AppState;
use crate::store::{Bootstrap, FileStore};

pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Logs go to stderr so they never mix with the game on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(data_dir = %config.storage.data_dir.display(), "opening record store");
    let store = FileStore::open(config.storage.clone())?;

    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match store.bootstrap_questions() {
        Ok(Bootstrap::AlreadyFilled(count)) => {
            tracing::debug!(count, "question bank loaded");
        }
        Ok(Bootstrap::Imported { imported, skipped }) => {
            console.say(format_args!(
                "Initialisation depuis le fichier texte '{}'...",
                config.storage.import_file.display()
            ))?;
            console.say(format_args!(
                "Importation terminee : {imported} question(s), {skipped} ligne(s) ignoree(s)."
            ))?;
        }
        Ok(Bootstrap::NoImportFile) => {
            console.say(format_args!(
                "Erreur : Impossible d'ouvrir {}",
                config.storage.import_file.display()
            ))?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "question bank bootstrap failed");
            console.say(format_args!("Erreur de stockage : {e}"))?;
        }
    }

    let state = AppState::new(store, config.max_questions_per_game);
    let mut rng = rand::rng();
    commands::session(&mut console, &state, &mut rng)?;

    Ok(())
}

//! Interactive commands and the main menu.

pub mod admin;
pub mod auth;
pub mod history;
pub mod play;

pub use admin::admin_menu;
pub use auth::login;
pub use history::{show_history, show_scores};
pub use play::{play, GameSummary};

use crate::console::Console;
use crate::error::{CommandError, Result};
use crate::state::AppState;
use quiz_core::Player;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::warn;

/// Whole interactive session: welcome, login, main menu, goodbye.
pub fn session<R, W, G>(console: &mut Console<R, W>, state: &AppState, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.say("\nBIENVENUE DANS BURGERQUIZBOT !")?;

    if let Some(mut player) = login(console, state)? {
        main_menu(console, state, &mut player, rng)?;
    }

    console.say("Au revoir !")?;
    Ok(())
}

/// Main menu loop. Store errors are reported and the menu keeps running.
pub fn main_menu<R, W, G>(
    console: &mut Console<R, W>,
    state: &AppState,
    player: &mut Player,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        console.say(format_args!(
            "\n=================================\n   MENU PRINCIPAL - {}\n=================================",
            player.nickname()
        ))?;
        console.say("1. Jouer au Quiz\n2. Mon historique\n3. Voir les scores")?;
        if player.is_admin() {
            console.say("4. Administration")?;
        }
        console.say("0. Quitter")?;

        let Some(choice) = console.read_int(0, 4, "Votre choix : ")? else {
            return Ok(());
        };

        let result = match choice {
            0 => return Ok(()),
            1 => play(console, state, player, rng).map(|_| ()),
            2 => show_history(console, state, player.nickname()),
            3 => show_scores(console, state),
            4 if player.is_admin() => admin_menu(console, state, player),
            _ => console.say("Acces interdit !").map_err(CommandError::from),
        };

        match result {
            Ok(()) => {}
            Err(CommandError::Store(e)) => {
                warn!(error = %e, "store error");
                console.say(format_args!("Erreur de stockage : {e}"))?;
            }
            Err(e) => return Err(e),
        }
    }
}

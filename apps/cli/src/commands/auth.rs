//! Nickname login.

use crate::console::Console;
use crate::error::Result;
use crate::state::AppState;
use crate::store::{PlayerRepository, StoreError};
use quiz_core::types::{check_nickname, GUEST_NICKNAME};
use quiz_core::Player;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Log a player in by nickname, registering unknown nicknames.
///
/// An empty nickname plays as the guest account. Returns `None` when the
/// input closes before a nickname is given, or when the player store cannot
/// be read or written; that error is shown and logged.
pub fn login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> Result<Option<Player>> {
    let nickname = loop {
        let Some(typed) = console.read_line("Entrez votre pseudo : ")? else {
            return Ok(None);
        };

        let nickname = if typed.is_empty() {
            GUEST_NICKNAME.to_string()
        } else {
            typed
        };

        match check_nickname(&nickname) {
            Ok(()) => break nickname,
            Err(e) => console.say(format_args!("Pseudo refuse : {e}"))?,
        }
    };

    match find_or_register(state, &nickname) {
        Ok((player, registered)) => {
            if registered && player.is_admin() {
                console.say("Premier joueur inscrit : vous etes administrateur.")?;
            }
            Ok(Some(player))
        }
        Err(e) => {
            warn!(nickname = %nickname, error = %e, "login failed");
            console.say(format_args!("Erreur de stockage : {e}"))?;
            Ok(None)
        }
    }
}

/// Existing player, or a newly registered one (flagged `true`).
fn find_or_register(
    state: &AppState,
    nickname: &str,
) -> std::result::Result<(Player, bool), StoreError> {
    if let Some(player) = state.store.find_player(nickname)? {
        info!(nickname = player.nickname(), "player logged in");
        return Ok((player, false));
    }

    let player = state.store.register_player(nickname)?;
    Ok((player, true))
}

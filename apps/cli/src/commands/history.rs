//! Personal history and score tables.

use crate::console::Console;
use crate::error::Result;
use crate::state::AppState;
use crate::store::{HistoryRepository, PlayerRepository};
use chrono::{DateTime, Local, Utc};
use quiz_core::{HistoryEntry, Player};
use std::io::{BufRead, Write};

/// Rows shown in each table.
pub const TABLE_LEN: usize = 10;

/// Show the player's most recent games, newest first.
pub fn show_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
    nickname: &str,
) -> Result<()> {
    let history = state.store.load_history()?;

    console.say(format_args!("\n--- HISTORIQUE DE {nickname} ---"))?;
    let games = recent_games(&history, Some(nickname), TABLE_LEN);
    if games.is_empty() {
        console.say("Aucune partie jouée.")?;
    }
    for entry in games {
        console.say(format_args!(
            "[{}] Score: {} (Diff: {})",
            format_date(entry.played_at()),
            entry.score(),
            entry.difficulty().to_value()
        ))?;
    }
    Ok(())
}

/// Show the best players, then the latest games of everyone.
pub fn show_scores<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> Result<()> {
    let players = state.store.load_players()?;
    let history = state.store.load_history()?;

    console.say("\n--- MEILLEURS SCORES ---")?;
    let ranking = leaderboard(&players, TABLE_LEN);
    if ranking.is_empty() {
        console.say("Aucun joueur inscrit.")?;
    }
    for (rank, player) in ranking.iter().enumerate() {
        console.say(format_args!(
            "{}. {} : {} pts",
            rank + 1,
            player.nickname(),
            player.best_score()
        ))?;
    }

    console.say("\n--- DERNIERES PARTIES JOUEES (GLOBAL) ---")?;
    let games = recent_games(&history, None, TABLE_LEN);
    if games.is_empty() {
        console.say("Aucune partie jouée.")?;
    }
    for entry in games {
        console.say(format_args!("{} : {} pts", entry.nickname(), entry.score()))?;
    }
    Ok(())
}

/// Latest `limit` games, newest first, optionally of one player only.
pub fn recent_games<'a>(
    history: &'a [HistoryEntry],
    nickname: Option<&str>,
    limit: usize,
) -> Vec<&'a HistoryEntry> {
    history
        .iter()
        .rev()
        .filter(|entry| nickname.map_or(true, |name| entry.nickname() == name))
        .take(limit)
        .collect()
}

/// Players by best score, highest first; ties sorted by nickname.
pub fn leaderboard(players: &[Player], limit: usize) -> Vec<&Player> {
    let mut ranking: Vec<&Player> = players.iter().collect();
    ranking.sort_by(|a, b| {
        b.best_score()
            .cmp(&a.best_score())
            .then_with(|| a.nickname().cmp(b.nickname()))
    });
    ranking.truncate(limit);
    ranking
}

fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

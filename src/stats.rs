//! Top-damage checks over a player's match history.
//!
//! The scan walks the id page most-recent-first and reduces it into two
//! facts: when the player last topped the damage chart and how often they
//! did within the window.

use tracing::debug;

use crate::riot::{ApiResponse, MatchApi};

/// Outcome of checking a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopDamageResult {
    pub is_top: bool,
    /// Damage dealt by whoever topped the match.
    pub max_damage: u32,
}

/// Aggregate over a window of recent matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageHistorySummary {
    /// Creation time (epoch seconds) of the most recent match the player
    /// topped, if any.
    pub last_top_epoch_secs: Option<u64>,
    /// Number of matches in the window the player topped.
    pub top_count: u32,
}

/// Scan up to `window` recent matches of `puuid` and summarize their
/// top-damage record.
///
/// A failed id listing and an empty history are observably identical: both
/// yield an empty summary without any detail fetch. A detail fetch that
/// fails mid-scan is skipped and does not count toward the window.
pub async fn compute_damage_history(
    api: &dyn MatchApi,
    puuid: &str,
    window: u32,
) -> DamageHistorySummary {
    if window == 0 {
        return DamageHistorySummary::default();
    }

    let match_ids = api.get_match_ids(puuid, window).await.unwrap_or_default();
    if match_ids.is_empty() {
        return DamageHistorySummary::default();
    }

    let mut summary = DamageHistorySummary::default();

    for match_id in match_ids {
        let match_data = match api.get_match(&match_id).await {
            Ok(m) => m,
            Err(e) => {
                debug!("skipping match {}: {}", match_id, e);
                continue;
            }
        };

        let Some(top) = match_data.top_damage_participant() else {
            continue;
        };
        if top.puuid == puuid {
            summary.top_count += 1;
            // Ids arrive most-recent-first, so the first hit is the latest
            // one. Never overwritten by older hits later in the scan.
            summary
                .last_top_epoch_secs
                .get_or_insert(match_data.game_creation_secs());
        }
    }

    summary
}

/// Check whether `puuid` topped the damage chart of one specific match.
///
/// Fails only when the match itself cannot be fetched.
pub async fn evaluate_top_damage(
    api: &dyn MatchApi,
    puuid: &str,
    match_id: &str,
) -> ApiResponse<TopDamageResult> {
    let match_data = api.get_match(match_id).await?;

    Ok(match match_data.top_damage_participant() {
        Some(top) => TopDamageResult {
            is_top: top.puuid == puuid,
            max_damage: top.total_damage_dealt_to_champions,
        },
        None => TopDamageResult {
            is_top: false,
            max_damage: 0,
        },
    })
}

//! Slash command implementations used by the Discord bot.

use tracing::warn;

use crate::discord::bot::Context;
use crate::error::AppError;
use crate::riot::AccountApi;

mod damage_check;
mod hello;
mod last_top_damage;
mod top_damage_count;

pub use damage_check::damage_check;
pub use hello::hello;
pub use last_top_damage::last_top_damage;
pub use top_damage_count::top_damage_count;

/// Matches scanned by the history commands.
pub(crate) const HISTORY_WINDOW: u32 = 20;

/// Pick the explicit identity or fall back to the configured default player.
fn identity_or_default(
    ctx: &Context<'_>,
    game_name: Option<String>,
    tag_line: Option<String>,
) -> (String, String) {
    let data = ctx.data();
    (
        game_name.unwrap_or_else(|| data.default_game_name.clone()),
        tag_line.unwrap_or_else(|| data.default_tag_line.clone()),
    )
}

/// Resolve a Riot ID to its PUUID. Replies with the resolution-failure
/// message and returns `None` when the account cannot be resolved, whatever
/// the upstream reason was.
async fn resolve_puuid(
    ctx: &Context<'_>,
    game_name: &str,
    tag_line: &str,
) -> Result<Option<String>, AppError> {
    match ctx
        .data()
        .riot
        .get_account_by_riot_id(game_name, tag_line)
        .await
    {
        Ok(account) => Ok(Some(account.puuid)),
        Err(e) => {
            warn!("could not resolve {}#{}: {}", game_name, tag_line, e);
            ctx.say(format!(
                "❌ Could not resolve **{}#{}**.",
                game_name, tag_line
            ))
            .await?;
            Ok(None)
        }
    }
}

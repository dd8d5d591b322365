use tracing::instrument;

use crate::discord::bot::Context;
use crate::discord::commands::{HISTORY_WINDOW, identity_or_default, resolve_puuid};
use crate::error::AppError;
use crate::stats::compute_damage_history;

/// Count how often a player topped the damage chart in their recent matches.
#[poise::command(slash_command)]
#[instrument(skip_all, fields(user_id = %ctx.author().id))]
pub async fn top_damage_count(
    ctx: Context<'_>,
    #[description = "Game name (before the #), defaults to the tracked player"] game_name: Option<
        String,
    >,
    #[description = "Tag line (after the #), defaults to the tracked player"] tag_line: Option<
        String,
    >,
) -> Result<(), AppError> {
    let (game_name, tag_line) = identity_or_default(&ctx, game_name, tag_line);

    ctx.defer().await?;

    let Some(puuid) = resolve_puuid(&ctx, &game_name, &tag_line).await? else {
        return Ok(());
    };

    let summary =
        compute_damage_history(ctx.data().riot.as_ref(), &puuid, HISTORY_WINDOW).await;

    ctx.say(format!(
        "✅ **{}#{}** had the highest damage **{}x** out of the last {} games.",
        game_name, tag_line, summary.top_count, HISTORY_WINDOW
    ))
    .await?;

    Ok(())
}

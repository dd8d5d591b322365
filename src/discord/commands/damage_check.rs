use tracing::{instrument, warn};

use crate::discord::bot::Context;
use crate::discord::commands::{identity_or_default, resolve_puuid};
use crate::error::AppError;
use crate::riot::MatchApi;
use crate::stats::evaluate_top_damage;

/// Check whether a player dealt the most damage in their latest match.
#[poise::command(slash_command)]
#[instrument(skip_all, fields(user_id = %ctx.author().id))]
pub async fn damage_check(
    ctx: Context<'_>,
    #[description = "Game name (before the #), defaults to the tracked player"] game_name: Option<
        String,
    >,
    #[description = "Tag line (after the #), defaults to the tracked player"] tag_line: Option<
        String,
    >,
) -> Result<(), AppError> {
    let (game_name, tag_line) = identity_or_default(&ctx, game_name, tag_line);

    // Defer response since API calls might take a moment
    ctx.defer().await?;

    let Some(puuid) = resolve_puuid(&ctx, &game_name, &tag_line).await? else {
        return Ok(());
    };

    let riot = ctx.data().riot.as_ref();
    let last_match_id = riot
        .get_match_ids(&puuid, 1)
        .await
        .unwrap_or_default()
        .into_iter()
        .next();
    let Some(match_id) = last_match_id else {
        ctx.say(format!(
            "❌ No recent match found for **{}#{}**.",
            game_name, tag_line
        ))
        .await?;
        return Ok(());
    };

    match evaluate_top_damage(riot, &puuid, &match_id).await {
        Ok(result) if result.is_top => {
            ctx.say(format!(
                "✅ **{}#{}** dealt the most damage to champions: **{}**.",
                game_name, tag_line, result.max_damage
            ))
            .await?;
        }
        Ok(result) => {
            ctx.say(format!(
                "❌ **{}#{}** did not deal the most damage. Top was **{}**.",
                game_name, tag_line, result.max_damage
            ))
            .await?;
        }
        Err(e) => {
            warn!("could not load match {}: {}", match_id, e);
            ctx.say("❌ Could not retrieve match data.").await?;
        }
    }

    Ok(())
}

use poise::serenity_prelude::Mentionable;

use crate::discord::bot::Context;
use crate::error::AppError;

/// Say hello to the bot.
#[poise::command(slash_command, ephemeral)]
pub async fn hello(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.say(format!("Hello, {}! 👋", ctx.author().mention()))
        .await?;
    Ok(())
}

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::discord::commands;
use crate::error::AppError;
use crate::riot::RiotClient;

/// Shared data accessible in all commands
#[derive(Debug)]
pub struct Data {
    pub riot: Arc<RiotClient>,
    /// Riot ID checked when a command is invoked without an explicit player.
    pub default_game_name: String,
    pub default_tag_line: String,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

pub fn create_framework(data: Data) -> poise::Framework<Data, AppError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::hello(),
                commands::damage_check(),
                commands::last_top_damage(),
                commands::top_damage_count(),
            ],
            on_error: |error| {
                Box::pin(async move {
                    handle_error(error).await;
                })
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(
                    bot_name = %ready.user.name,
                    guild_count = ready.guilds.len(),
                    "🎮 Bot is ready"
                );
                Ok(data)
            })
        })
        .build()
}

async fn handle_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                error = ?error,
                command = ctx.command().name.as_str(),
                user_id = %ctx.author().id,
                "🎮 ❌ Command execution failed"
            );
            let _ = ctx
                .say("❌ Internal Error: Something went wrong, please retry later.")
                .await;
        }
        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
            warn!(
                error = %error,
                command = ctx.command().name.as_str(),
                "🎮 ⚠️ Invalid command argument"
            );
            let _ = ctx.say(format!("Invalid argument: {}", error)).await;
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

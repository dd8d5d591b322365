use std::env;

use crate::error::AppError;

/// Identity checked by the parameter-less command invocations.
const DEFAULT_GAME_NAME: &str = "RoboFico";
const DEFAULT_TAG_LINE: &str = "SMER";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub riot_api_key: String,
    /// Riot ID used when a command is invoked without an explicit player.
    pub default_game_name: String,
    pub default_tag_line: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_BOT_TOKEN")
            .map_err(|_| AppError::Config("DISCORD_BOT_TOKEN must be set".into()))?;

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let default_game_name =
            env::var("DEFAULT_GAME_NAME").unwrap_or_else(|_| DEFAULT_GAME_NAME.into());
        let default_tag_line =
            env::var("DEFAULT_TAG_LINE").unwrap_or_else(|_| DEFAULT_TAG_LINE.into());

        Ok(Self {
            discord_token,
            riot_api_key,
            default_game_name,
            default_tag_line,
        })
    }
}

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use serenity::GatewayIntents;
use tracing::{error, info};

use crate::config::Config;
use crate::discord::{Data, create_framework};
use crate::riot::RiotClient;

mod config;
mod discord;
mod error;
mod logging;
mod relative_time;
mod riot;
mod stats;

#[tokio::main]
async fn main() {
    logging::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("❌ invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    info!("🤖 Starting RoboDMG...");

    let riot = Arc::new(RiotClient::new(config.riot_api_key.clone()));
    riot.start_metrics_logging();

    let data = Data {
        riot,
        default_game_name: config.default_game_name.clone(),
        default_tag_line: config.default_tag_line.clone(),
    };

    let framework = create_framework(data);
    let intents = GatewayIntents::non_privileged();

    let mut client = match serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("❌ [DISCORD] client creation failed: {e}");
            std::process::exit(1);
        }
    };

    info!("🌐 [DISCORD] connecting to gateway");
    if let Err(e) = client.start().await {
        error!("❌ [DISCORD] connection failed: {e:?}");
        std::process::exit(1);
    }
}

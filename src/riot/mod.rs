//! Typed wrappers around the official Riot REST endpoints used by the bot.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub mod client;
pub mod metrics;
pub mod region;
pub mod types;

pub use client::RiotClient;

use types::{AccountDto, MatchDto};

/// Failure taxonomy of an upstream call. Kept as a tagged variant internally;
/// command handlers collapse every variant into one user-visible outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("rate limited by upstream")]
    RateLimited,

    #[error("HTTP status error: {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A call to the Riot API either succeeds with the decoded payload or fails
/// with an [`ApiError`].
pub type ApiResponse<T> = Result<T, ApiError>;

/// Account-V1 lookups.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> ApiResponse<AccountDto>;
}

/// Match-V5 lookups.
#[async_trait]
pub trait MatchApi: Send + Sync {
    /// Most-recent-first match ids, a single bounded page.
    async fn get_match_ids(&self, puuid: &str, count: u32) -> ApiResponse<Vec<String>>;

    async fn get_match(&self, match_id: &str) -> ApiResponse<MatchDto>;
}

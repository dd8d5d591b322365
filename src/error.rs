use thiserror::Error;

use crate::riot::ApiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {0}")]
    Api(#[from] ApiError),

    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}

mod bot;
pub mod commands;

pub use bot::{Context, Data, create_framework};

/// API route modules
pub mod download;
pub mod health;
pub mod player;
pub mod queue;
pub mod search;

//! nekobot: chat-bot webhook responder for the Hackers game group.
//! Fuzzy command resolution over small immutable reference tables.

pub mod cli;
pub mod data;
pub mod matcher;
pub mod reply;
pub mod resolver;
pub mod server;

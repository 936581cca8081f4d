//! pomo - pomodoro timer and session log
//!
//! This library backs two binaries:
//! - `pomo-server`, a REST store for recorded sessions
//! - `pomo`, the CLI that runs the countdown and talks to the server

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod db;
pub mod models;
pub mod notify;
pub mod services;
pub mod timer;

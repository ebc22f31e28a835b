//! Survey Tiger: author survey questions, preview them and take the survey
//! from the terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod storage;
pub mod survey;
pub mod ui;

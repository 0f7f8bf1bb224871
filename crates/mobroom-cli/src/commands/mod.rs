pub mod config;
pub mod link;
pub mod run;
pub mod settings;
pub mod stats;
pub mod team;

pub mod animation;
pub mod config;
pub mod events;
pub mod schedule;

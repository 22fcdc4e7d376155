pub mod api;
pub mod app;
pub mod config;
pub mod high_score;
pub mod input;
pub mod render;
pub mod views;

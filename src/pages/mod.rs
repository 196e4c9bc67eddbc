// src/pages/mod.rs
pub mod bot;
pub mod export;
pub mod models;
pub mod source;

pub use bot::Revisi2Bot;

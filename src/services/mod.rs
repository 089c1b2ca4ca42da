// src/services/mod.rs
pub mod bartender;
pub mod cocktail_db;
pub mod llm;

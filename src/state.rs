// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::services::cocktail_db::{CocktailDb, DrinkSource};
use crate::services::llm::{ChatModel, OpenAiChat};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub drinks: Arc<dyn DrinkSource>,
    pub model: Arc<dyn ChatModel>,
}

impl AppState {
    pub fn new(drinks: Arc<dyn DrinkSource>, model: Arc<dyn ChatModel>) -> Self {
        Self { drinks, model }
    }

    /// Wire the HTTP-backed clients described by `config`, sharing one connection pool.
    pub fn from_config(config: &Config) -> Self {
        let client = Client::new();
        Self::new(
            Arc::new(CocktailDb::new(client.clone(), &config.cocktail_db_url)),
            Arc::new(OpenAiChat::new(
                client,
                &config.openai_base_url,
                config.api_key.clone(),
                &config.openai_model,
            )),
        )
    }
}

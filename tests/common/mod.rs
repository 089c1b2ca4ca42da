#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::Router;
use bartender_bot::error::AppError;
use bartender_bot::services::cocktail_db::{Drink, DrinkSource};
use bartender_bot::services::llm::{ChatMessage, ChatModel};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub fn drink(name: &str, instructions: &str, ingredients: &[(&str, &str)]) -> Drink {
    let mut fields = HashMap::new();
    for (i, (measure, ingredient)) in ingredients.iter().enumerate() {
        fields.insert(format!("strIngredient{}", i + 1), Value::from(*ingredient));
        fields.insert(format!("strMeasure{}", i + 1), Value::from(*measure));
    }
    Drink {
        name: name.to_string(),
        instructions: Some(instructions.to_string()),
        fields,
    }
}

#[derive(Default)]
pub struct FakeDrinks {
    pub by_name: Vec<Drink>,
    pub by_ingredient: Vec<Drink>,
    pub queries: Mutex<Vec<String>>,
}

#[async_trait]
impl DrinkSource for FakeDrinks {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Drink>, AppError> {
        self.queries.lock().await.push(format!("s={name}"));
        Ok(self.by_name.clone())
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Drink>, AppError> {
        self.queries.lock().await.push(format!("i={ingredient}"));
        Ok(self.by_ingredient.clone())
    }
}

pub struct FakeModel {
    pub reply: Option<String>,
    pub prompts: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeModel {
    pub fn replying(reply: &str) -> Self {
        Self { reply: Some(reply.to_string()), prompts: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { reply: None, prompts: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl ChatModel for FakeModel {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AppError> {
        self.prompts.lock().await.push(messages.to_vec());
        self.reply.clone().ok_or(AppError::EmptyCompletion)
    }
}

/// Serve `app` on an ephemeral local port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

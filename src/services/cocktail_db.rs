// src/services/cocktail_db.rs
use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::AppError;

/// Ingredient/measure slots per drink in the cocktail database.
pub const INGREDIENT_SLOTS: usize = 15;

/// One drink record. Filter results only carry the name and id, so the
/// remaining fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Drink {
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Drink {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.fields
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Ingredient lines, `"<measure> <ingredient>"` or just the ingredient.
    pub fn ingredients(&self) -> Vec<String> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let ingredient = self.slot("strIngredient", i)?;
                Some(match self.slot("strMeasure", i) {
                    Some(measure) => format!("{measure} {ingredient}"),
                    None => ingredient.to_string(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
struct DrinkList {
    #[serde(default, deserialize_with = "drinks_or_empty")]
    drinks: Vec<Drink>,
}

// The API answers `null` or a bare string such as "no data found" when nothing matches.
fn drinks_or_empty<'de, D>(deserializer: D) -> Result<Vec<Drink>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| Drink::deserialize(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

#[async_trait]
pub trait DrinkSource: Send + Sync {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Drink>, AppError>;
    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Drink>, AppError>;
}

/// HTTP client for TheCocktailDB's JSON API.
#[derive(Debug, Clone)]
pub struct CocktailDb {
    client: Client,
    base_url: String,
}

impl CocktailDb {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch(&self, path: &str, key: &str, value: &str) -> Result<Vec<Drink>, AppError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, %key, %value, "querying cocktail database");

        let list: DrinkList = self
            .client
            .get(&url)
            .query(&[(key, value)])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(AppError::CocktailDb)?
            .json()
            .await
            .map_err(AppError::CocktailDb)?;

        tracing::debug!(count = list.drinks.len(), "cocktail database answered");
        Ok(list.drinks)
    }
}

#[async_trait]
impl DrinkSource for CocktailDb {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Drink>, AppError> {
        self.fetch("search.php", "s", name).await
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Drink>, AppError> {
        self.fetch("filter.php", "i", ingredient).await
    }
}

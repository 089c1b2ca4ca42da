// src/services/bartender.rs
use std::sync::LazyLock;

use regex::Regex;

use super::cocktail_db::{Drink, DrinkSource};
use super::llm::{ChatMessage, ChatModel, Role};
use crate::error::AppError;
use crate::message::AskQuery;

pub const SYSTEM_PROMPT: &str =
    "You are a helpful and friendly virtual bartender. Be informative, concise, and conversational.";
pub const FOLLOW_UP_PROMPT: &str = "Can you explain how to make it and offer any tips or variations?";

static QUESTION_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"how do i make|what's in a|tell me how to make|recipe for").expect("valid regex")
});

/// Reduce a free-form question ("How do I make a Margarita?") to a search term.
pub fn extract_drink_name(message: &str) -> String {
    let lowered = message.to_lowercase();
    let cleaned = QUESTION_PHRASES.replace_all(&lowered, "");
    cleaned
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

pub fn format_drink(drink: &Drink) -> String {
    format!(
        "{}\nIngredients:\n- {}\n\nInstructions:\n{}",
        drink.name,
        drink.ingredients().join("\n- "),
        drink.instructions.as_deref().unwrap_or_default()
    )
}

pub fn bartender_prompt(user_input: &str, drink_info: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Role::System, SYSTEM_PROMPT),
        ChatMessage::new(Role::User, format!("The user asked: {user_input}")),
        ChatMessage::new(
            Role::Assistant,
            format!("Here's a drink recipe you can use:\n\n{drink_info}"),
        ),
        ChatMessage::new(Role::User, FOLLOW_UP_PROMPT),
    ]
}

/// Answer one `/ask` query: list drinks for an ingredient, or look a drink up
/// by name and have the chat model explain it.
pub async fn answer(
    drinks: &dyn DrinkSource,
    model: &dyn ChatModel,
    query: &AskQuery,
) -> Result<String, AppError> {
    if let Some(ingredient) = query
        .ingredient
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty())
    {
        let ingredient = ingredient.to_lowercase();
        tracing::info!(%ingredient, "ingredient search");

        let found = drinks.filter_by_ingredient(&ingredient).await?;
        if found.is_empty() {
            return Err(AppError::NotFound(format!(
                "Sorry, no drinks found with the ingredient '{ingredient}'."
            )));
        }

        let names: Vec<&str> = found.iter().map(|d| d.name.as_str()).collect();
        return Ok(format!(
            "Here are drinks that use {ingredient}: {}",
            names.join(", ")
        ));
    }

    let search_term = extract_drink_name(&query.message);
    tracing::info!(%search_term, "drink search");

    let found = drinks.search_by_name(&search_term).await?;
    let Some(drink) = found.first() else {
        return Err(AppError::NotFound(format!(
            "Sorry, I couldn't find a drink for '{search_term}'."
        )));
    };

    let drink_info = format_drink(drink);
    tracing::debug!(drink = %drink.name, "asking chat model");
    model
        .complete(&bartender_prompt(&query.message, &drink_info))
        .await
}

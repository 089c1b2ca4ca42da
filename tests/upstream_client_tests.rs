mod common;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use bartender_bot::error::AppError;
use bartender_bot::services::cocktail_db::{CocktailDb, DrinkSource};
use bartender_bot::services::llm::{ChatMessage, ChatModel, OpenAiChat, Role};
use common::spawn;
use serde_json::{Value, json};
use tokio::sync::Mutex;

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn search(State(seen): State<Seen>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let found = params.get("s").map(String::as_str) == Some("margarita");
    seen.lock().await.push(params);
    if found {
        Json(json!({ "drinks": [{
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strInstructions": "Rub the rim of the glass with lime.",
            "strIngredient1": "Tequila",
            "strMeasure1": "1 1/2 oz ",
            "strIngredient2": "Triple sec",
            "strMeasure2": "1/2 oz ",
            "strIngredient3": null,
            "strMeasure3": null
        }]}))
    } else {
        Json(json!({ "drinks": null }))
    }
}

async fn filter(State(seen): State<Seen>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    seen.lock().await.push(params);
    Json(json!({ "drinks": "no data found" }))
}

fn cocktail_db_mock(seen: Seen) -> Router {
    Router::new()
        .route("/search.php", get(search))
        .route("/filter.php", get(filter))
        .with_state(seen)
}

#[tokio::test]
async fn test_search_by_name_parses_drinks() {
    let seen = Seen::default();
    let addr = spawn(cocktail_db_mock(seen.clone())).await;
    let db = CocktailDb::new(reqwest::Client::new(), format!("http://{addr}/"));

    let drinks = db.search_by_name("margarita").await.unwrap();

    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].name, "Margarita");
    assert_eq!(drinks[0].ingredients(), vec!["1 1/2 oz Tequila", "1/2 oz Triple sec"]);
    assert_eq!(seen.lock().await[0].get("s").map(String::as_str), Some("margarita"));
}

#[tokio::test]
async fn test_no_matches_are_empty() {
    let seen = Seen::default();
    let addr = spawn(cocktail_db_mock(seen.clone())).await;
    let db = CocktailDb::new(reqwest::Client::new(), format!("http://{addr}"));

    assert!(db.search_by_name("dragon blood").await.unwrap().is_empty());
    assert!(db.filter_by_ingredient("unobtainium").await.unwrap().is_empty());
    assert_eq!(seen.lock().await[1].get("i").map(String::as_str), Some("unobtainium"));
}

#[tokio::test]
async fn test_cocktail_db_http_error() {
    let addr = spawn(Router::new().route(
        "/search.php",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;
    let db = CocktailDb::new(reqwest::Client::new(), format!("http://{addr}"));

    let err = db.search_by_name("margarita").await.unwrap_err();
    assert!(matches!(err, AppError::CocktailDb(_)));
}

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    auth: Arc<Mutex<Option<String>>>,
}

#[tokio::test]
async fn test_chat_completion_request_and_reply() {
    let captured = Captured::default();
    let app = Router::new()
        .route(
            "/v1/chat/completions",
            post(|State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| async move {
                *captured.auth.lock().await = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                *captured.body.lock().await = Some(body);
                Json(json!({
                    "choices": [{ "message": { "role": "assistant", "content": "  Shake with ice.\n" } }]
                }))
            }),
        )
        .with_state(captured.clone());
    let addr = spawn(app).await;

    let model = OpenAiChat::new(
        reqwest::Client::new(),
        format!("http://{addr}/v1"),
        Some("sk-test".to_string()),
        "gpt-3.5-turbo",
    );
    let reply = model
        .complete(&[ChatMessage::new(Role::User, "How do I make a Margarita?")])
        .await
        .unwrap();

    assert_eq!(reply, "Shake with ice.");
    assert_eq!(captured.auth.lock().await.as_deref(), Some("Bearer sk-test"));

    let body = captured.body.lock().await.clone().unwrap();
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 500);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "How do I make a Margarita?");
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn test_chat_completion_without_choices() {
    let addr = spawn(Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    ))
    .await;
    let model = OpenAiChat::new(reqwest::Client::new(), format!("http://{addr}"), None, "gpt-3.5-turbo");

    let err = model.complete(&[]).await.unwrap_err();
    assert!(matches!(err, AppError::EmptyCompletion));
}

// src/ask_form/dom.rs
//! Handles to the two page elements the submit handler touches.
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[async_trait]
pub trait InputField: Send + Sync {
    /// Current text of the field.
    async fn value(&self) -> String;
}

#[async_trait]
pub trait OutputArea: Send + Sync {
    /// Replace the displayed text.
    async fn set_text(&self, text: &str);
}

/// Editable in-memory text field. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    inner: Arc<RwLock<String>>,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self { inner: Arc::new(RwLock::new(value.into())) }
    }

    pub async fn set_value(&self, value: impl Into<String>) {
        *self.inner.write().await = value.into();
    }
}

#[async_trait]
impl InputField for TextField {
    async fn value(&self) -> String {
        self.inner.read().await.clone()
    }
}

/// In-memory output area. Clones share the same text.
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    inner: Arc<RwLock<String>>,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn text(&self) -> String {
        self.inner.read().await.clone()
    }
}

#[async_trait]
impl OutputArea for TextArea {
    async fn set_text(&self, text: &str) {
        *self.inner.write().await = text.to_string();
    }
}

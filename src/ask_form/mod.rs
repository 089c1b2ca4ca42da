// src/ask_form/mod.rs
//! Headless form submit handler for the ask page.
//!
//! On each submission the handler shows [`LOADING_TEXT`], posts the input to
//! the ask endpoint, and replaces the output with the reply's `response`
//! field, or with [`ERROR_TEXT`] if anything fails. Submissions are not
//! coordinated: when several are in flight, whichever settles last owns the
//! output area.
pub mod dom;
pub mod transport;

pub use dom::{InputField, OutputArea, TextArea, TextField};
pub use transport::{AskTransport, HttpTransport};

use crate::message::AskRequest;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "There was an error contacting the AI.";

/// A form submission. The handler cancels the default navigation.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone)]
pub struct SubmitHandler<T, I, O> {
    transport: T,
    input: I,
    output: O,
}

impl<T, I, O> SubmitHandler<T, I, O>
where
    T: AskTransport,
    I: InputField,
    O: OutputArea,
{
    pub fn new(transport: T, input: I, output: O) -> Self {
        Self { transport, input, output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub async fn on_submit(&self, event: &mut SubmitEvent) {
        event.prevent_default();

        let request = AskRequest { message: self.input.value().await };
        self.output.set_text(LOADING_TEXT).await;

        match self.transport.ask(&request).await {
            Ok(reply) => {
                let text = reply.response.unwrap_or_else(|| {
                    tracing::warn!("reply has no `response` field; showing empty text");
                    String::new()
                });
                self.output.set_text(&text).await;
            }
            Err(err) => {
                self.output.set_text(ERROR_TEXT).await;
                tracing::error!(error = %err, "ask request failed");
            }
        }
    }
}

//! Submit one message to the ask endpoint and print what the page would show.
use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bartender_bot::ask_form::{HttpTransport, OutputArea, SubmitEvent, SubmitHandler, TextField};

#[derive(Debug, Parser)]
#[command(name = "ask", about = "Ask the virtual bartender a question")]
struct Args {
    /// Ask endpoint.
    #[arg(long, env = "ASK_URL", default_value = "http://localhost:3000/ask")]
    url: String,

    /// Message to send; may be empty.
    message: Vec<String>,
}

/// Prints every text update on its own line.
struct Terminal;

#[async_trait]
impl OutputArea for Terminal {
    async fn set_text(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let transport = HttpTransport::new(reqwest::Client::new(), args.url);
    let handler = SubmitHandler::new(transport, TextField::new(args.message.join(" ")), Terminal);

    handler.on_submit(&mut SubmitEvent::new()).await;
    Ok(())
}

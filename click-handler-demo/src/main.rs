use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use click_handler_demo::{ClickHandlerDemo, Console, TracingConsole};
use click_render::render_to_document;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Render the click-handler demo and press its buttons.
#[derive(Debug, Parser)]
#[command(name = "click-handler-demo", version, about)]
struct Cli {
    /// Button to click after rendering, counted from 1. Repeat to click several.
    #[arg(short, long = "click", value_name = "BUTTON")]
    clicks: Vec<usize>,

    /// Print the rendered document as HTML
    #[arg(long)]
    html: bool,

    /// Write logs as JSON lines
    #[arg(long)]
    json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json);

    let console: Arc<dyn Console> = Arc::new(TracingConsole);
    let document = render_to_document::<anyhow::Error>(ClickHandlerDemo::new(console).into())
        .await
        .context("Failed to render the demo")?;

    if cli.html {
        println!("{}", document.to_html());
    }

    let buttons = document.query_selector_all("button");
    for index in cli.clicks {
        let Some(&button) = index.checked_sub(1).and_then(|index| buttons.get(index)) else {
            bail!("No button {}, pick one of 1..={}", index, buttons.len());
        };
        tracing::debug!(button = index, "clicking");
        document.click(button)?;
    }

    Ok(())
}

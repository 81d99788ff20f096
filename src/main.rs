//! pagebrief CLI - summarize the active browser tab.
//!
//! The application logic lives in the library; this file parses arguments,
//! wires up the browser host and completion client, and handles top-level
//! errors.

use anyhow::Context;
use clap::Parser;
use tracing::info;

use pagebrief::browser::CdpHost;
use pagebrief::core::config::AppConfig;
use pagebrief::core::models::{Language, LengthInput, PresenterKind, SessionOptions};
use pagebrief::extractor;
use pagebrief::presenter::presenter_for;
use pagebrief::summarizer::LlmClient;

#[derive(Parser)]
#[command(name = "pagebrief")]
#[command(version, about = "Summarize the visible text of the active browser tab", long_about = None)]
struct Cli {
    /// Target language for the summary
    #[arg(long, value_enum)]
    language: Language,

    /// Desired summary length in words (digits only; defaults to 150)
    #[arg(long, default_value = "")]
    length: String,

    /// Where to render the summary
    #[arg(long, value_enum, default_value_t = PresenterKind::Overlay)]
    presenter: PresenterKind,

    /// DevTools websocket URL of a running Chrome; launches one when absent
    #[arg(long)]
    chrome_url: Option<String>,

    /// Print the extracted page text instead of summarizing
    #[arg(long)]
    show_text: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pagebrief::setup_logging();
    let cli = Cli::parse();

    let chrome_url = cli
        .chrome_url
        .clone()
        .or_else(|| std::env::var("CHROME_WS_URL").ok());
    if let Some(raw) = &chrome_url {
        let parsed = url::Url::parse(raw).context("invalid --chrome-url")?;
        if parsed.scheme() != "ws" && parsed.scheme() != "wss" {
            anyhow::bail!("--chrome-url must be a ws:// or wss:// DevTools URL");
        }
    }

    let host = match &chrome_url {
        Some(ws_url) => CdpHost::connect(ws_url).await?,
        None => CdpHost::launch().await?,
    };

    if cli.show_text {
        let (_tab, text) = extractor::extract_page_text(&host).await?;
        println!("{}", text.as_str());
        println!("\n--- Extracted {} characters ---", text.char_count());
        return Ok(());
    }

    let options = SessionOptions {
        language: Some(cli.language),
        length: LengthInput::from_raw(&cli.length),
        presenter: cli.presenter,
    };

    let resolved = options.length.resolve();
    if options.length.is_default() {
        println!("Summary length: {resolved} words (default)");
    } else {
        println!("Summary length: {resolved} words");
    }

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("config error: {e}"))?;
    let client = LlmClient::new(
        config.openai_api_key,
        config.openai_org_id,
        config.openai_model,
    );
    let presenter = presenter_for(options.presenter);

    let summary =
        pagebrief::pipeline::run_pipeline(&host, &client, presenter.as_ref(), &options).await?;

    info!("Summary rendered via {:?}", options.presenter);
    println!("\n{summary}");
    Ok(())
}

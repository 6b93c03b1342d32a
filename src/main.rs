use cooker_catalog::config::{AppConfig, OutputFormat, load_config};
use cooker_catalog::controller::{CommandOutcome, handle_command};
use cooker_catalog::model::{Catalog, ViewState};
use cooker_catalog::render::format_view;
use cooker_catalog::source::{load_catalog, source_for};
use cooker_catalog::view::recompute;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the rendered view
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", config_path, e);
            return;
        }
    };

    let timeout = Duration::from_secs(config.request_timeout_seconds);
    let catalog = match source_for(&config.dataset, timeout) {
        Ok(source) => load_catalog(source.as_ref()).await,
        Err(e) => {
            warn!("Cannot create dataset source: {}", e);
            Catalog::failed(e.to_string())
        }
    };

    let mut state = config.default_view.clone();
    show(&catalog, &state, config.output);
    if let Some(hint) = startup_hint(config.output) {
        println!("{}", hint);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Input read error: {}", e);
                break;
            }
        };

        match handle_command(&line, &mut state, &catalog) {
            CommandOutcome::Recompute => show(&catalog, &state, config.output),
            CommandOutcome::Reply(text) => println!("{}", text),
            CommandOutcome::Quit => break,
        }
    }
    info!("Session ended.");
}

/// JSON consumers read stdout, so only text output gets the hint.
fn startup_hint(output: OutputFormat) -> Option<&'static str> {
    match output {
        OutputFormat::Text => Some("Type /help for commands."),
        OutputFormat::Json => None,
    }
}

/// Recomputes the view for `state` and writes it to stdout.
fn show(catalog: &Catalog, state: &ViewState, output: OutputFormat) {
    let view = recompute(catalog, state);
    match output {
        OutputFormat::Text => println!("{}", format_view(&view, catalog.loaded_at)),
        OutputFormat::Json => match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Failed to serialize view: {}", e),
        },
    }
}

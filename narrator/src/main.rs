#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::{path::Path, sync::Arc};

use args::Args;
use clap::Parser;
use lambda_runtime::{LambdaEvent, service_fn};
use narrator_config::Config;
use serde_json::Value;
use speech::{GatewayResponse, Invocation, SpeechHandler};
use tokio::io::AsyncWriteExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::resolve(args.config.as_deref())?;

    narrator_telemetry::init(&config.telemetry)?;

    tracing::info!(
        config_path = ?args.config,
        profile = ?config.handler.profile,
        "starting narrator"
    );

    let handler = Arc::new(speech::build_handler(&config).await?);

    if let Some(event_path) = args.event {
        return invoke_once(&handler, &event_path).await;
    }

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { handle_event(&handler, event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("lambda runtime failed: {e}"))?;

    tracing::info!("narrator stopped");
    Ok(())
}

/// Adapt a runtime event to the handler
async fn handle_event(
    handler: &SpeechHandler,
    event: LambdaEvent<Value>,
) -> Result<GatewayResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    let invocation = Invocation::new(context.request_id);

    Ok(handler.handle(payload, &invocation).await)
}

/// Handle one event from disk and print the response to stdout
async fn invoke_once(handler: &SpeechHandler, path: &Path) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read event file {}: {e}", path.display()))?;

    let event: Value = serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse event file: {e}"))?;

    let invocation = Invocation::new(format!("local-{}", uuid::Uuid::new_v4()));
    let response = handler.handle(event, &invocation).await;

    let mut output = serde_json::to_vec_pretty(&response)?;
    output.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    Ok(())
}

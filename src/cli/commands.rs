//! CLI command definitions and handlers

use clap::Subcommand;
use std::io::Write;
use tracing::info;

use crate::cli::demo::{run_demo, write_translation};
use crate::core::client::AiwfClient;
use crate::core::models::TranslateRequest;

/// Commands for the AIWF client
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Translate the two sample texts (default)
    Demo,

    /// Translate one text with the translator agent
    Translate {
        /// Target language code
        #[arg(short, long)]
        target_lang: String,

        /// Text to translate
        #[arg(long)]
        text: String,
    },

    /// Call any agent with a JSON payload
    Call {
        /// Agent name as exposed under /agent/{name}
        agent: String,

        /// JSON request body
        #[arg(short, long, default_value = "{}")]
        json: String,
    },

    /// Check server health
    Health,

    /// List agents exposed by the server
    Agents,
}

/// Dispatch a command, writing its output to `out`
pub async fn execute<W: Write>(
    client: &AiwfClient,
    command: Commands,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Demo => run_demo(client, out).await,
        Commands::Translate { target_lang, text } => {
            handle_translate(client, target_lang, text, out).await
        }
        Commands::Call { agent, json } => handle_call(client, &agent, &json, out).await,
        Commands::Health => handle_health(client, out).await,
        Commands::Agents => handle_agents(client, out).await,
    }
}

/// Handle single translation command
pub async fn handle_translate<W: Write>(
    client: &AiwfClient,
    target_lang: String,
    text: String,
    out: &mut W,
) -> anyhow::Result<()> {
    let request = TranslateRequest::new(target_lang, text);
    info!("Translating {} chars to {}", request.text.chars().count(), request.target_lang);

    writeln!(out, "🔄 Translating...")?;
    let response = client.translator(&request).await?;
    write_translation(out, &request, &response)?;

    Ok(())
}

/// Handle generic agent call
pub async fn handle_call<W: Write>(
    client: &AiwfClient,
    agent: &str,
    json: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let payload: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| anyhow::anyhow!("Request body is not valid JSON: {}", e))?;

    info!("Calling agent {}", agent);
    let call = client
        .call_agent::<_, serde_json::Value>(agent, &payload)
        .await?;

    writeln!(out, "{}", serde_json::to_string_pretty(&call.data)?)?;

    if let Some(trace) = &call.trace {
        writeln!(
            out,
            "\nTokens: {} prompt / {} completion / {} total",
            trace.usage.prompt, trace.usage.completion, trace.usage.total
        )?;
    }

    Ok(())
}

/// Handle health command
pub async fn handle_health<W: Write>(client: &AiwfClient, out: &mut W) -> anyhow::Result<()> {
    let health = client.health().await?;

    if !health.is_ok() {
        anyhow::bail!("Server at {} reports status {:?}", client.base_url(), health.status);
    }

    writeln!(out, "✅ Server at {} is healthy", client.base_url())?;
    Ok(())
}

/// Handle agents command
pub async fn handle_agents<W: Write>(client: &AiwfClient, out: &mut W) -> anyhow::Result<()> {
    let list = client.list_agents().await?;

    if list.agents.is_empty() {
        writeln!(out, "No agents exposed by {}", client.base_url())?;
        return Ok(());
    }

    writeln!(out, "Agents at {}:", client.base_url())?;
    for entry in &list.agents {
        match entry.description() {
            Some(description) => writeln!(out, "  - {}: {}", entry.name(), description)?,
            None => writeln!(out, "  - {}", entry.name())?,
        }
    }

    Ok(())
}

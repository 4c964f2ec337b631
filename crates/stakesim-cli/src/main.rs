//! Local chat harness for the stakeholder backend.
//!
//! Binary name: `stakesim`
//!
//! Reads trainee messages from stdin, runs each through the turn
//! orchestrator, and prints the stakeholder's reply. Ctrl-C cancels the
//! in-flight turn and exits.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use stakesim_infra::bootstrap::build_orchestrator;
use stakesim_infra::config::load_config;
use stakesim_observe::tracing_setup::{init_tracing, shutdown_tracing};
use stakesim_types::turn::TurnOutcome;

#[derive(Parser)]
#[command(name = "stakesim", about = "Chat with a simulated project stakeholder")]
struct Cli {
    /// User id under which messages are stored
    #[arg(long, default_value = "local")]
    user: String,

    /// Continue an existing conversation instead of starting a new one
    #[arg(long)]
    conversation: Option<Uuid>,

    /// Export spans via OpenTelemetry (stdout exporter)
    #[arg(long)]
    otel: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.otel).map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))?;

    let config = load_config()?;
    let orchestrator = build_orchestrator(&config).await?;

    let conversation_id = cli.conversation.unwrap_or_else(Uuid::now_v7);
    println!("conversation {conversation_id} (Ctrl-D to exit)");

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        if cancel.is_cancelled() {
            break;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => match line? {
                Some(line) => line,
                None => break,
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        match orchestrator
            .process_turn(&cli.user, conversation_id, &line, &cancel)
            .await
        {
            TurnOutcome::Success { reply } => println!("{reply}\n"),
            TurnOutcome::Failure { kind, detail } => {
                eprintln!("turn failed ({kind}): {detail}\n");
            }
        }
    }

    shutdown_tracing();
    Ok(())
}

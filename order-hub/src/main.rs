use order_hub::{StateUpdate, StoreManager, print_banner, setup_environment};
use shared::store::{CommandError, CommandErrorCode, CommandResponse, StoreCommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment();
    print_banner();

    tracing::info!(environment = %config.environment, "Order hub starting...");

    // 2. Seed and store
    let manager = Arc::new(StoreManager::from_config(&config)?);
    let updates = tokio::spawn(log_updates(manager.subscribe()));

    // 3. Command loop: one JSON StoreCommand per line
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<StoreCommand>(line) {
            Ok(cmd) => manager.execute_command(cmd),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed command");
                CommandResponse::error(
                    command_id_hint(line),
                    CommandError::new(CommandErrorCode::InvalidCommand, e.to_string()),
                )
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    // 4. EOF
    let state = manager.snapshot();
    tracing::info!(
        sequence = state.last_sequence,
        orders = state.orders.len(),
        cart_items = state.cart_item_count(),
        "Input closed, shutting down"
    );

    drop(manager);
    if let Err(e) = updates.await {
        tracing::error!(error = %e, "Update logger task failed");
    }
    Ok(())
}

/// Best-effort command id from a line that failed to parse as a command
fn command_id_hint(line: &str) -> String {
    serde_json::from_str::<serde_json::Value>(line)
        .ok()
        .and_then(|v| v.get("command_id")?.as_str().map(str::to_owned))
        .unwrap_or_default()
}

async fn log_updates(mut rx: broadcast::Receiver<StateUpdate>) {
    loop {
        match rx.recv().await {
            Ok(update) => tracing::info!(
                sequence = update.sequence,
                command_id = update.command_id.as_deref().unwrap_or("-"),
                actions = ?update.actions,
                "State updated"
            ),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Update logger lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

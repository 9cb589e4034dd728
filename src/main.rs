// ABOUTME: Hook binary - reads one invocation request from stdin and decides.
// ABOUTME: Emits a deny payload on stdout when a guard blocks; always exits 0.

use tokio::io::AsyncReadExt;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use issue_guard::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("issue_guard=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Stdout carries only decision payloads and the exit code is always 0;
    // internal failures resolve to implicit allow.
    if let Err(err) = run().await {
        warn!("hook failed, allowing command: {err}");
    }
}

async fn run() -> Result<(), GuardError> {
    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;

    let input: HookInput = match serde_json::from_str(&raw) {
        Ok(input) => input,
        Err(err) => {
            debug!("unparseable invocation request, allowing: {err}");
            return Ok(());
        }
    };

    let registry = HookRegistry::new();
    registry.register(IssueCreateGuard::new()).await;

    let event = HookEvent::PreToolUse {
        tool_name: input.tool_name.clone().unwrap_or_default(),
        input: input.tool_input.clone(),
    };

    match registry.fire(&event).await.map_err(GuardError::Hook)? {
        HookAction::Continue => {
            debug!(command = input.command(), "allow");
        }
        HookAction::Block(reason) => {
            debug!(command = input.command(), "deny");
            println!("{}", serde_json::to_string(&HookOutput::deny(reason))?);
        }
    }

    Ok(())
}

//! Fetch any resource from the configured bridge and print it as JSON

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;

use openhue_runtime::AppContext;
use openhue_runtime::deps::UserInterface;

/// Get command arguments (matches CLI parser)
#[derive(Debug, Clone)]
pub struct GetArgs {
    /// Resource path, e.g. `/clip/v2/resource/light`
    pub path: String,
}

/// Execute the get command with injected dependencies
pub async fn execute_with_deps(
    args: &GetArgs,
    ctx: &AppContext,
    ui: &Arc<dyn UserInterface>,
) -> Result<Value> {
    let body: Value = ctx
        .client
        .get_json(&args.path)
        .await
        .with_context(|| format!("Failed to fetch {}", args.path))?;

    ui.print(&serde_json::to_string_pretty(&body)?);
    Ok(body)
}

/// Execute the get command with default dependencies
pub async fn execute(args: GetArgs, ctx: &AppContext) -> Result<()> {
    use crate::ui::RealUserInterface;

    let ui: Arc<dyn UserInterface> = Arc::new(RealUserInterface);
    execute_with_deps(&args, ctx, &ui).await.map(|_| ())
}

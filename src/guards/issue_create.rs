// ABOUTME: IssueCreateGuard - blocks `gh issue create` against restricted repos.
// ABOUTME: Applies an IssuePolicy to PreToolUse events and formats denials.

use async_trait::async_trait;

use crate::hook::{Hook, HookAction, HookEvent};
use crate::policy::{Decision, IssuePolicy};

/// Guard that blocks issue creation in restricted repositories.
///
/// Only shell commands are inspected: events naming a tool other than `Bash`
/// pass through untouched. Events without a tool name are still inspected so
/// that minimal invocation requests keep working.
pub struct IssueCreateGuard {
    policy: IssuePolicy,
}

impl IssueCreateGuard {
    /// Create a guard with the compiled-in denylist.
    pub fn new() -> Self {
        Self::with_policy(IssuePolicy::default())
    }

    /// Create a guard with a custom policy.
    pub fn with_policy(policy: IssuePolicy) -> Self {
        Self { policy }
    }

    fn deny_reason(repo: &str) -> String {
        format!(
            "❌ Creating issues in '{repo}' requires explicit user approval.\n\n\
             This repository is restricted per CLAUDE.md guidelines. Please:\n\
             1. Ask the user for permission to create an issue in {repo}\n\
             2. Use the correct repository instead:\n   \
             - ck37/zed-quarto-extension (extension-specific issues)\n   \
             - ck37/tree-sitter-quarto (grammar issues)\n\n\
             See CLAUDE.md for complete repository guidelines."
        )
    }
}

impl Default for IssueCreateGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Hook for IssueCreateGuard {
    fn accepts(&self, event: &HookEvent) -> bool {
        let HookEvent::PreToolUse { tool_name, .. } = event;
        tool_name.is_empty() || tool_name == "Bash"
    }

    async fn on_event(&self, event: &HookEvent) -> Result<HookAction, anyhow::Error> {
        let HookEvent::PreToolUse { input, .. } = event;
        let command = input
            .get("command")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");

        match self.policy.evaluate(command) {
            Decision::Allow => Ok(HookAction::Continue),
            Decision::Deny { repo } => Ok(HookAction::Block(Self::deny_reason(&repo))),
        }
    }
}

// ABOUTME: Hook system for vetoing tool executions before they run.
// ABOUTME: Provides events, actions, and a registry for hook management.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

/// Events that can trigger hooks.
#[derive(Debug, Clone)]
pub enum HookEvent {
    /// Fired before a tool is executed.
    PreToolUse {
        /// Name of the tool, or empty when the caller did not provide one.
        tool_name: String,
        input: Value,
    },
}

/// Actions a hook can return to control execution flow.
#[derive(Debug, Clone)]
pub enum HookAction {
    /// Continue with normal execution.
    Continue,

    /// Block the execution with a human-readable reason.
    Block(String),
}

impl Default for HookAction {
    fn default() -> Self {
        Self::Continue
    }
}

/// Trait for implementing hooks.
#[async_trait]
pub trait Hook: Send + Sync {
    /// Called when an event occurs.
    ///
    /// Return `Ok(HookAction::Continue)` to proceed normally.
    /// Return `Ok(HookAction::Block(reason))` to veto the execution.
    /// Return `Err` to signal a hook failure.
    async fn on_event(&self, event: &HookEvent) -> Result<HookAction, anyhow::Error>;

    /// Optional: Filter which events this hook cares about.
    /// Default returns true for all events.
    fn accepts(&self, event: &HookEvent) -> bool {
        let _ = event;
        true
    }
}

/// Registry for managing and firing hooks.
pub struct HookRegistry {
    hooks: RwLock<Vec<Arc<dyn Hook>>>,
}

impl HookRegistry {
    /// Create a new empty hook registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(Vec::new()),
        }
    }

    /// Register a hook.
    pub async fn register(&self, hook: impl Hook + 'static) {
        self.hooks.write().await.push(Arc::new(hook));
    }

    /// Register a hook wrapped in Arc.
    pub async fn register_arc(&self, hook: Arc<dyn Hook>) {
        self.hooks.write().await.push(hook);
    }

    /// Fire an event to all registered hooks.
    ///
    /// Hooks run in registration order. If any hook blocks, returns that
    /// Block immediately without consulting the remaining hooks.
    pub async fn fire(&self, event: &HookEvent) -> Result<HookAction, anyhow::Error> {
        let hooks = self.hooks.read().await;

        for hook in hooks.iter() {
            if !hook.accepts(event) {
                continue;
            }

            match hook.on_event(event).await? {
                HookAction::Continue => {}
                HookAction::Block(reason) => {
                    return Ok(HookAction::Block(reason));
                }
            }
        }

        Ok(HookAction::Continue)
    }

    /// Get the number of registered hooks.
    pub async fn len(&self) -> usize {
        self.hooks.read().await.len()
    }

    /// Check if the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.hooks.read().await.is_empty()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

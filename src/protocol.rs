// ABOUTME: Defines the hook wire protocol - the invocation request read from
// ABOUTME: stdin and the hookSpecificOutput decision payload written to stdout.

use serde::{Deserialize, Serialize};

/// Name of the hook event this guard participates in.
pub const PRE_TOOL_USE: &str = "PreToolUse";

/// An invocation request, as delivered on stdin before a tool executes.
///
/// Parsing is deliberately tolerant: every field is optional and a missing or
/// mis-typed member degrades to the empty command rather than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// Name of the tool about to run, when the caller provides it.
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Raw tool input. For shell tools this carries a `command` member.
    #[serde(default)]
    pub tool_input: serde_json::Value,
}

impl HookInput {
    /// The command string under inspection, or `""` when absent.
    pub fn command(&self) -> &str {
        self.tool_input
            .get("command")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
    }
}

/// A permission decision in the hook protocol's wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
    Ask,
}

/// The decision document written to stdout when an invocation is denied.
#[derive(Debug, Clone, Serialize)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

/// Inner payload of a [`HookOutput`].
#[derive(Debug, Clone, Serialize)]
pub struct HookSpecificOutput {
    #[serde(rename = "hookEventName")]
    pub hook_event_name: &'static str,

    #[serde(rename = "permissionDecision")]
    pub permission_decision: PermissionDecision,

    #[serde(rename = "permissionDecisionReason")]
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// Create a deny decision with the given human-readable reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: PRE_TOOL_USE,
                permission_decision: PermissionDecision::Deny,
                permission_decision_reason: reason.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_input() {
        let input: HookInput = serde_json::from_str(
            r#"{"tool_name": "Bash", "tool_input": {"command": "git status"}}"#,
        )
        .unwrap();

        assert_eq!(input.tool_name.as_deref(), Some("Bash"));
        assert_eq!(input.command(), "git status");
    }

    #[test]
    fn parses_input_without_tool_name() {
        let input: HookInput =
            serde_json::from_str(r#"{"tool_input": {"command": "ls"}}"#).unwrap();

        assert_eq!(input.tool_name, None);
        assert_eq!(input.command(), "ls");
    }

    #[test]
    fn missing_command_defaults_to_empty() {
        let input: HookInput = serde_json::from_str(r#"{"tool_input": {}}"#).unwrap();
        assert_eq!(input.command(), "");

        let input: HookInput = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(input.command(), "");
    }

    #[test]
    fn non_string_command_defaults_to_empty() {
        let input: HookInput =
            serde_json::from_str(r#"{"tool_input": {"command": 123}}"#).unwrap();
        assert_eq!(input.command(), "");
    }

    #[test]
    fn deny_output_has_hook_specific_shape() {
        let output = HookOutput::deny("not allowed");
        let json = serde_json::to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["hookSpecificOutput"]["hookEventName"], "PreToolUse");
        assert_eq!(parsed["hookSpecificOutput"]["permissionDecision"], "deny");
        assert_eq!(
            parsed["hookSpecificOutput"]["permissionDecisionReason"],
            "not allowed"
        );
    }

    #[test]
    fn permission_decision_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PermissionDecision::Allow).unwrap(),
            "\"allow\""
        );
        assert_eq!(
            serde_json::to_string(&PermissionDecision::Deny).unwrap(),
            "\"deny\""
        );
        assert_eq!(
            serde_json::to_string(&PermissionDecision::Ask).unwrap(),
            "\"ask\""
        );
    }
}

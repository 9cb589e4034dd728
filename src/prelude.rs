// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use issue_guard::prelude::*;` to get started quickly.

pub use crate::error::GuardError;
pub use crate::guards::IssueCreateGuard;
pub use crate::hook::{Hook, HookAction, HookEvent, HookRegistry};
pub use crate::policy::{Decision, IssuePolicy, IssuePolicyBuilder};
pub use crate::protocol::{HookInput, HookOutput, PermissionDecision};

// ABOUTME: Built-in guards for command inspection.
// ABOUTME: Includes the restricted-repo issue creation guard.

mod issue_create;

pub use issue_create::IssueCreateGuard;

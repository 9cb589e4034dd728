// ABOUTME: Defines the policy engine - the denylist, decisions, and evaluation.
// ABOUTME: Matching is literal substring containment over the command string.

/// The decision made for an inspected command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the command.
    Allow,

    /// Deny the command. `repo` names the restricted repository that matched.
    Deny { repo: String },
}

/// The operation that makes a command subject to this policy.
const ISSUE_CREATE: &str = "gh issue create";

/// Repositories that require explicit approval for issue creation.
const RESTRICTED_REPOS: &[&str] = &["zed-industries/extensions", "zed-industries/zed"];

/// A policy that restricts `gh issue create` to approved repositories.
pub struct IssuePolicy {
    restricted: Vec<String>,
}

impl IssuePolicy {
    /// Create a new policy builder.
    pub fn builder() -> IssuePolicyBuilder {
        IssuePolicyBuilder::new()
    }

    /// Evaluate whether a command should be allowed.
    ///
    /// Denies when the command contains the issue-create operation combined
    /// with a `--repo <repo>` or `-R <repo>` reference to a restricted
    /// repository. Matching is case-sensitive literal substring containment,
    /// not a shell parse: quoted arguments and reordered flags are not
    /// recognized. Entries are checked in declaration order; the first match
    /// wins.
    pub fn evaluate(&self, command: &str) -> Decision {
        if !command.contains(ISSUE_CREATE) {
            return Decision::Allow;
        }

        for repo in &self.restricted {
            // Both --repo and -R flag spellings.
            if command.contains(&format!("--repo {repo}"))
                || command.contains(&format!("-R {repo}"))
            {
                return Decision::Deny { repo: repo.clone() };
            }
        }

        Decision::Allow
    }

    /// The restricted repository identifiers, in evaluation order.
    pub fn restricted(&self) -> &[String] {
        &self.restricted
    }
}

impl Default for IssuePolicy {
    /// The compiled-in denylist.
    fn default() -> Self {
        Self {
            restricted: RESTRICTED_REPOS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Builder for constructing policies.
pub struct IssuePolicyBuilder {
    restricted: Vec<String>,
}

impl Default for IssuePolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IssuePolicyBuilder {
    /// Create a new builder with an empty denylist.
    pub fn new() -> Self {
        Self {
            restricted: Vec::new(),
        }
    }

    /// Add a repository that requires approval for issue creation.
    pub fn restrict(mut self, repo: impl Into<String>) -> Self {
        self.restricted.push(repo.into());
        self
    }

    /// Build the policy.
    pub fn build(self) -> IssuePolicy {
        IssuePolicy {
            restricted: self.restricted,
        }
    }
}

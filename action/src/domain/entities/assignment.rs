//! Assignment request, target and outcome

/// What the workflow asked for, after input parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRequest {
    /// Explicit logins, weighted entries already expanded
    pub explicit_names: Vec<String>,
    /// Team slugs to expand into their members
    pub team_names: Vec<String>,
    /// Number of candidates to pick at random; 0 keeps all of them
    pub sample_size: u32,
    pub abort_if_has_assignees: bool,
    pub remove_prior_assignees: bool,
    pub allow_empty_result: bool,
    pub allow_self_assign: bool,
    pub manual_target_number: Option<u64>,
}

impl Default for AssignmentRequest {
    fn default() -> Self {
        Self {
            explicit_names: Vec::new(),
            team_names: Vec::new(),
            sample_size: 0,
            abort_if_has_assignees: false,
            remove_prior_assignees: false,
            allow_empty_result: false,
            allow_self_assign: true,
            manual_target_number: None,
        }
    }
}

impl AssignmentRequest {
    /// A request needs at least one source of candidates
    pub fn has_sources(&self) -> bool {
        !self.explicit_names.is_empty() || !self.team_names.is_empty()
    }
}

/// The issue or pull request being assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRef {
    pub owner: String,
    pub repo_name: String,
    pub number: u64,
    pub is_issue: bool,
    pub actor: Option<String>,
}

impl TargetRef {
    pub fn is_pull_request(&self) -> bool {
        !self.is_issue
    }

    pub fn kind(&self) -> &'static str {
        if self.is_issue {
            "issue"
        } else {
            "pull request"
        }
    }
}

impl std::fmt::Display for TargetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo_name, self.number)
    }
}

/// Terminal state of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// All applicable calls succeeded
    Applied {
        assignees: Vec<String>,
        reviewers: Vec<String>,
    },
    /// The target already had assignees and the run was told to back off
    Aborted { existing: Vec<String> },
}

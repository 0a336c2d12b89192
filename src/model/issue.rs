//! Issue records and the in-memory issue store.
//!
//! The store is the dependency accessor the explanation engine walks. It
//! keeps issues in load order and indexes them by id; it never builds a
//! reverse index, so "who depends on X" is answered by scanning forward
//! edges (see [`crate::insights::sources::dependents`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::insights::sources::DependencyAccessor;

/// Why an issue record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIssue {
    #[error("missing id")]
    MissingId,
    #[error("missing title")]
    MissingTitle,
    #[error("unknown status")]
    UnknownStatus,
    #[error("unknown issue type")]
    UnknownType,
    #[error("updated_at is earlier than created_at")]
    UpdatedBeforeCreated,
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[default]
    Open,
    InProgress,
    Blocked,
    Closed,
    /// Anything the tracker emits that this tool does not know about.
    #[serde(other)]
    Unknown,
}

impl IssueStatus {
    /// Upper-case label used in headers.
    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Open => "OPEN",
            IssueStatus::InProgress => "IN_PROGRESS",
            IssueStatus::Blocked => "BLOCKED",
            IssueStatus::Closed => "CLOSED",
            IssueStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn is_closed(self) -> bool {
        matches!(self, IssueStatus::Closed)
    }
}

/// Kind of work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Bug,
    Feature,
    #[default]
    Task,
    Epic,
    Chore,
    #[serde(other)]
    Other,
}

impl IssueType {
    pub fn name(self) -> &'static str {
        match self {
            IssueType::Bug => "bug",
            IssueType::Feature => "feature",
            IssueType::Task => "task",
            IssueType::Epic => "epic",
            IssueType::Chore => "chore",
            IssueType::Other => "other",
        }
    }
}

/// Type of a dependency edge.
///
/// An empty or missing type is a legacy "blocks" edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    #[default]
    #[serde(alias = "")]
    Blocks,
    Related,
    ParentChild,
    DiscoveredFrom,
    #[serde(other)]
    Other,
}

impl DependencyKind {
    pub fn name(self) -> &'static str {
        match self {
            DependencyKind::Blocks => "blocks",
            DependencyKind::Related => "related",
            DependencyKind::ParentChild => "parent-child",
            DependencyKind::DiscoveredFrom => "discovered-from",
            DependencyKind::Other => "other",
        }
    }

    pub fn is_blocking(self) -> bool {
        matches!(self, DependencyKind::Blocks)
    }
}

/// A directed edge: the owning issue depends on `depends_on_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(default)]
    pub issue_id: String,
    pub depends_on_id: String,
    #[serde(rename = "type", default)]
    pub kind: DependencyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// A unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub design: String,
    #[serde(default)]
    pub acceptance_criteria: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub issue_type: IssueType,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Minimal constructor, mostly for fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Add a blocking dependency on `target`.
    #[must_use]
    pub fn depends_on(mut self, target: impl Into<String>) -> Self {
        self.dependencies.push(Dependency {
            issue_id: self.id.clone(),
            depends_on_id: target.into(),
            kind: DependencyKind::Blocks,
            created_at: None,
            created_by: None,
        });
        self
    }

    /// Check the record against the tracker's rules.
    ///
    /// Timestamps are only compared when both are present.
    pub fn validate(&self) -> Result<(), InvalidIssue> {
        if self.id.trim().is_empty() {
            return Err(InvalidIssue::MissingId);
        }
        if self.title.trim().is_empty() {
            return Err(InvalidIssue::MissingTitle);
        }
        if self.status == IssueStatus::Unknown {
            return Err(InvalidIssue::UnknownStatus);
        }
        if self.issue_type == IssueType::Other {
            return Err(InvalidIssue::UnknownType);
        }
        if let (Some(created), Some(updated)) = (self.created_at, self.updated_at) {
            if updated < created {
                return Err(InvalidIssue::UpdatedBeforeCreated);
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Issues in load order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
    by_id: HashMap<String, usize>,
}

impl IssueStore {
    /// Build a store; a later duplicate id replaces the earlier record.
    pub fn new(issues: Vec<Issue>) -> Self {
        let mut store = Self::default();
        for issue in issues {
            store.insert(issue);
        }
        store
    }

    fn insert(&mut self, issue: Issue) {
        match self.by_id.get(&issue.id) {
            Some(&idx) => self.issues[idx] = issue,
            None => {
                self.by_id.insert(issue.id.clone(), self.issues.len());
                self.issues.push(issue);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.by_id.get(id).and_then(|&idx| self.issues.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }
}

impl DependencyAccessor for IssueStore {
    fn dependencies_of(&self, id: &str) -> Vec<&str> {
        self.get(id)
            .map(|issue| {
                issue
                    .dependencies
                    .iter()
                    .map(|dep| dep.depends_on_id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn issue_ids(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.id.as_str()).collect()
    }

    fn issue(&self, id: &str) -> Option<&Issue> {
        self.get(id)
    }
}

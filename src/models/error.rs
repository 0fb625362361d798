use std::fmt;
use thiserror::Error;

use super::ActivityField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    Invalid(String),
    Negative(i64),
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: ActivityField,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "{} is required", self.field.label()),
            IssueKind::Invalid(raw) => {
                write!(f, "{} must be a whole number, got '{}'", self.field.label(), raw)
            }
            IssueKind::Negative(value) => {
                write!(f, "{} must not be negative, got {}", self.field.label(), value)
            }
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Please fill in all fields to calculate your Goon Score: {}", join_issues(.0))]
    Validation(Vec<FieldIssue>),

    #[error("Score {total} does not fall in any rank tier")]
    UnclassifiedScore { total: i64 },

    #[error("Score is out of range: {0}")]
    OutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScoreError {
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ScoreError::Validation(issues) => issues,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

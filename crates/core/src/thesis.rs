//! Thesis status and artifact-kind enums.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a current thesis, stored as an integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThesisStatus {
    InProgress = 1,
    Finished = 2,
}

impl ThesisStatus {
    /// Database column value.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Parse from the database `status` column.
    pub fn from_id(id: i32) -> Result<Self, CoreError> {
        match id {
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Finished),
            other => Err(CoreError::Internal(format!(
                "Unknown thesis status id {other}"
            ))),
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Finished => "finished",
        }
    }
}

/// The four artifact categories a thesis can carry.
///
/// Text, presentation and supervisor review are required for archival; the
/// reviewer (consultant) review is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Text,
    Presentation,
    SupervisorReview,
    ReviewerReview,
}

impl FileKind {
    /// All kinds in materialization order.
    pub const ALL: [FileKind; 4] = [
        FileKind::Text,
        FileKind::Presentation,
        FileKind::SupervisorReview,
        FileKind::ReviewerReview,
    ];

    /// Short tag used in multipart field names, URLs, and archive filenames.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Presentation => "presentation",
            Self::SupervisorReview => "supervisor_review",
            Self::ReviewerReview => "reviewer_review",
        }
    }

    /// Parse from a tag (e.g. a URL path segment or form field name).
    pub fn from_tag(tag: &str) -> Result<Self, CoreError> {
        match tag {
            "text" => Ok(Self::Text),
            "presentation" => Ok(Self::Presentation),
            "supervisor_review" => Ok(Self::SupervisorReview),
            "reviewer_review" => Ok(Self::ReviewerReview),
            other => Err(CoreError::Validation(format!(
                "Unknown file kind '{other}'. Must be one of: text, presentation, supervisor_review, reviewer_review"
            ))),
        }
    }

    /// Whether archival requires this artifact to be present.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::ReviewerReview)
    }

    /// Human-readable name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "thesis text",
            Self::Presentation => "presentation",
            Self::SupervisorReview => "supervisor review",
            Self::ReviewerReview => "reviewer review",
        }
    }
}

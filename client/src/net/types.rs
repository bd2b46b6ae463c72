//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Application rows are kept as opaque JSON objects so whatever the backend
//! stores survives a round trip through the board untouched. Typed accessors
//! read the handful of keys the board displays.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================================
// APPLICATION STATUS
// =============================================================================

/// Kanban column an application sits in, in board order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    ToApply,
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 5] = [Self::ToApply, Self::Applied, Self::Interview, Self::Offer, Self::Rejected];

    /// Wire value stored in the `status` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToApply => "to_apply",
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
        }
    }

    /// Column heading shown on the board.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ToApply => "À postuler",
            Self::Applied => "Candidature envoyée",
            Self::Interview => "Entretien",
            Self::Offer => "Offre",
            Self::Rejected => "Refusée",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::ToApply => 0,
            Self::Applied => 1,
            Self::Interview => 2,
            Self::Offer => 3,
            Self::Rejected => 4,
        }
    }

    /// Column to the left, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Column to the right, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid application status: {s}"))
    }
}

// =============================================================================
// APPLICATION
// =============================================================================

/// One job application row, shape owned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Application(pub serde_json::Map<String, serde_json::Value>);

impl Application {
    /// Row identifier; numeric ids are rendered as decimal strings.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.text("company")
    }

    #[must_use]
    pub fn position(&self) -> Option<&str> {
        self.text("position")
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.text("location")
    }

    /// Board column; missing or unrecognized values land in the first column.
    #[must_use]
    pub fn status(&self) -> ApplicationStatus {
        self.text("status")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Overwrite the `status` key, leaving every other key as is.
    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.0
            .insert("status".to_owned(), serde_json::Value::String(status.as_str().to_owned()));
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str().filter(|s| !s.trim().is_empty())
    }
}

//! Homework domain model
//!
//! A tracked homework as reported by the status API, and the mapping from
//! its review status to the verdict text sent to the user.

use crate::error::{Error, Result};

/// Review status of a homework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    /// Reviewer accepted the work
    Approved,

    /// Work is taken for review
    Reviewing,

    /// Reviewer left remarks
    Rejected,

    /// Status code outside the documented set
    Unknown,
}

impl ReviewStatus {
    /// Parses a raw status code, tagging anything undocumented as `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "approved" => ReviewStatus::Approved,
            "reviewing" => ReviewStatus::Reviewing,
            "rejected" => ReviewStatus::Rejected,
            _ => ReviewStatus::Unknown,
        }
    }

    /// Verdict text for documented statuses
    pub fn verdict(&self) -> Option<&'static str> {
        match self {
            ReviewStatus::Approved => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
            ReviewStatus::Reviewing => Some("Работа взята на проверку ревьюером."),
            ReviewStatus::Rejected => Some("Работа проверена: у ревьюера есть замечания."),
            ReviewStatus::Unknown => None,
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "Approved"),
            ReviewStatus::Reviewing => write!(f, "Reviewing"),
            ReviewStatus::Rejected => write!(f, "Rejected"),
            ReviewStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A homework observed in one poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedItem {
    name: String,
    status: ReviewStatus,
    raw_status: String,
}

impl TrackedItem {
    pub fn new(name: impl Into<String>, raw_status: impl Into<String>) -> Self {
        let raw_status = raw_status.into();
        Self {
            name: name.into(),
            status: ReviewStatus::from_code(&raw_status),
            raw_status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Status code exactly as the API sent it
    pub fn raw_status(&self) -> &str {
        &self.raw_status
    }
}

/// Builds the notification text for a homework
///
/// Fails with [`Error::UnknownStatus`] when the status code has no verdict.
pub fn interpret(item: &TrackedItem) -> Result<String> {
    let verdict = item
        .status()
        .verdict()
        .ok_or_else(|| Error::UnknownStatus(item.raw_status().to_string()))?;

    Ok(format!(
        "Changed review status for \"{}\". {}",
        item.name(),
        verdict
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ReviewStatus::from_code("approved"), ReviewStatus::Approved);
        assert_eq!(ReviewStatus::from_code("reviewing"), ReviewStatus::Reviewing);
        assert_eq!(ReviewStatus::from_code("rejected"), ReviewStatus::Rejected);
        assert_eq!(ReviewStatus::from_code("Approved"), ReviewStatus::Unknown);
        assert_eq!(ReviewStatus::from_code(""), ReviewStatus::Unknown);
    }

    #[test]
    fn test_interpret_documented_statuses() {
        let item = TrackedItem::new("lesson1", "reviewing");
        assert_eq!(
            interpret(&item).unwrap(),
            "Changed review status for \"lesson1\". Работа взята на проверку ревьюером."
        );

        let item = TrackedItem::new("lesson1", "approved");
        assert_eq!(
            interpret(&item).unwrap(),
            "Changed review status for \"lesson1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );

        let item = TrackedItem::new("hw_sprint2", "rejected");
        assert_eq!(
            interpret(&item).unwrap(),
            "Changed review status for \"hw_sprint2\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_interpret_unknown_status() {
        for code in ["on_hold", "APPROVED", "", "reviewing "] {
            let item = TrackedItem::new("lesson1", code);
            assert_eq!(item.status(), ReviewStatus::Unknown);
            assert_eq!(
                interpret(&item),
                Err(Error::UnknownStatus(code.to_string()))
            );
        }
    }
}

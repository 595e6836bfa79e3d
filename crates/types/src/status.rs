//! Reading status of a book.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadStatus {
    #[serde(rename = "To Read")]
    ToRead,
    #[serde(rename = "Reading")]
    Reading,
    #[serde(rename = "Read")]
    Read,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Did Not Finish")]
    DidNotFinish,
}

impl ReadStatus {
    pub const ALL: [ReadStatus; 5] = [
        ReadStatus::ToRead,
        ReadStatus::Reading,
        ReadStatus::Read,
        ReadStatus::OnHold,
        ReadStatus::DidNotFinish,
    ];

    /// The label stored on disk and shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            ReadStatus::ToRead => "To Read",
            ReadStatus::Reading => "Reading",
            ReadStatus::Read => "Read",
            ReadStatus::OnHold => "On Hold",
            ReadStatus::DidNotFinish => "Did Not Finish",
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown read status '{0}' (expected one of: {expected})", expected = all_labels())]
pub struct UnknownReadStatus(pub String);

fn all_labels() -> String {
    ReadStatus::ALL.map(ReadStatus::label).join(", ")
}

impl FromStr for ReadStatus {
    type Err = UnknownReadStatus;

    /// Accepts the stored label as well as relaxed spellings such as
    /// `to-read`, `on_hold` or `dnf`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "toread" | "wishlist" => Ok(ReadStatus::ToRead),
            "reading" => Ok(ReadStatus::Reading),
            "read" => Ok(ReadStatus::Read),
            "onhold" => Ok(ReadStatus::OnHold),
            "didnotfinish" | "dnf" => Ok(ReadStatus::DidNotFinish),
            _ => Err(UnknownReadStatus(s.to_string())),
        }
    }
}

/// Wire form of `readStatus`: an empty string when unset.
///
/// Unknown labels degrade to unset so one odd record cannot make the whole
/// collection unreadable.
pub(crate) mod text {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ReadStatus;

    pub fn serialize<S>(status: &Option<ReadStatus>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(status.map(ReadStatus::label).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ReadStatus>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(None);
        }

        match raw.parse::<ReadStatus>() {
            Ok(status) => Ok(Some(status)),
            Err(e) => {
                tracing::warn!("Ignoring stored read status: {}", e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_relaxed_spellings() {
        for status in ReadStatus::ALL {
            assert_eq!(status.label().parse::<ReadStatus>(), Ok(status));
        }
        assert_eq!("to-read".parse::<ReadStatus>(), Ok(ReadStatus::ToRead));
        assert_eq!("ON_HOLD".parse::<ReadStatus>(), Ok(ReadStatus::OnHold));
        assert_eq!("dnf".parse::<ReadStatus>(), Ok(ReadStatus::DidNotFinish));
        assert!("finished".parse::<ReadStatus>().is_err());
    }

    #[test]
    fn unknown_status_error_lists_choices() {
        let err = "finished".parse::<ReadStatus>().unwrap_err();
        let source: &dyn std::error::Error = &err;

        assert_eq!(
            source.to_string(),
            "unknown read status 'finished' (expected one of: To Read, Reading, Read, On Hold, Did Not Finish)"
        );
    }

    #[test]
    fn serializes_with_stored_label() {
        assert_eq!(
            serde_json::to_string(&ReadStatus::DidNotFinish).unwrap(),
            "\"Did Not Finish\""
        );
    }
}

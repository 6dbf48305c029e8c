use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::ValidationError;

/// Routing category assigned to a detection.
///
/// Wire names are lowercase and fixed: `dry`, `wet`, `electronic` for the
/// three physical bins, plus the special-case markers `none`, `reject`, and
/// `multiplewaste`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Dry,
    Wet,
    Electronic,
    #[default]
    None,
    Reject,
    MultipleWaste,
}

impl Destination {
    /// Canonical order, as listed in error messages.
    pub const ALL: [Destination; 6] = [
        Destination::Dry,
        Destination::Wet,
        Destination::Electronic,
        Destination::None,
        Destination::Reject,
        Destination::MultipleWaste,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Dry => "dry",
            Destination::Wet => "wet",
            Destination::Electronic => "electronic",
            Destination::None => "none",
            Destination::Reject => "reject",
            Destination::MultipleWaste => "multiplewaste",
        }
    }

    /// All valid wire names joined by `", "`.
    pub fn options() -> String {
        Destination::ALL.map(|d| d.as_str()).join(", ")
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidDestination(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for dest in Destination::ALL {
            assert_eq!(dest.as_str().parse::<Destination>().unwrap(), dest);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_value(Destination::MultipleWaste).unwrap(),
            serde_json::json!("multiplewaste")
        );
        let parsed: Destination = serde_json::from_str("\"electronic\"").unwrap();
        assert_eq!(parsed, Destination::Electronic);
    }

    #[test]
    fn unknown_name_lists_valid_options() {
        let err = "plastic".parse::<Destination>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid destination: plastic. Valid options: dry, wet, electronic, none, reject, multiplewaste"
        );
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Destination::default(), Destination::None);
    }
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// What the supervisor does when a trigger fires into a slot that is still busy.
///
/// - `DropIfRunning`: skip this firing, the running one continues.
/// - `Replace`: cancel the running firing and start the new one.
/// - `Queue`: run the new firing once the slot frees up.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdmissionStrategy {
    #[default]
    DropIfRunning,
    Replace,
    Queue,
}

impl FromStr for AdmissionStrategy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop-if-running" | "drop" => Ok(AdmissionStrategy::DropIfRunning),
            "replace" => Ok(AdmissionStrategy::Replace),
            "queue" => Ok(AdmissionStrategy::Queue),
            other => Err(ModelError::UnknownAdmission(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AdmissionStrategy;

    #[test]
    fn parses_known_names() {
        assert_eq!(
            "drop".parse::<AdmissionStrategy>().unwrap(),
            AdmissionStrategy::DropIfRunning
        );
        assert_eq!(
            " Replace ".parse::<AdmissionStrategy>().unwrap(),
            AdmissionStrategy::Replace
        );
        assert_eq!(
            "queue".parse::<AdmissionStrategy>().unwrap(),
            AdmissionStrategy::Queue
        );
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert!("".parse::<AdmissionStrategy>().is_err());
        assert!("later".parse::<AdmissionStrategy>().is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// How a job reports a failed bean lookup.
///
/// `LogAndContinue` reports the failure to the log sink and tells the
/// scheduler the firing succeeded. `Propagate` hands the typed error to the
/// scheduler so its failure accounting sees it.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    #[default]
    LogAndContinue,
    Propagate,
}

impl FromStr for FailurePolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "log" | "log-and-continue" | "logandcontinue" => {
                Ok(FailurePolicy::LogAndContinue)
            }
            "propagate" | "fail" => Ok(FailurePolicy::Propagate),
            other => Err(ModelError::UnknownFailurePolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FailurePolicy;

    #[test]
    fn default_swallows_failures() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::LogAndContinue);
    }

    #[test]
    fn parses_and_deserializes() {
        assert_eq!(
            "propagate".parse::<FailurePolicy>().unwrap(),
            FailurePolicy::Propagate
        );
        let p: FailurePolicy = serde_json::from_str("\"logAndContinue\"").unwrap();
        assert_eq!(p, FailurePolicy::LogAndContinue);
        assert!("retry".parse::<FailurePolicy>().is_err());
    }
}

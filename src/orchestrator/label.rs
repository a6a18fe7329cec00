//! Routing labels and normalisation of free-form classifier output

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of routing decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoutingLabel {
    /// Factual questions, science, explanations
    Scientist,
    /// Stories, poetry, jokes
    Creative,
    /// Programming and debugging
    Coder,
}

impl RoutingLabel {
    /// Every label, in prompt order
    pub const ALL: [RoutingLabel; 3] = [Self::Scientist, Self::Creative, Self::Coder];

    /// Label used whenever the classifier's answer is unusable
    pub const DEFAULT: RoutingLabel = Self::Scientist;

    /// Canonical upper-case spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scientist => "SCIENTIST",
            Self::Creative => "CREATIVE",
            Self::Coder => "CODER",
        }
    }
}

impl fmt::Display for RoutingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for text that is not exactly one canonical label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown routing label: {0:?}")]
pub struct UnknownLabel(pub String);

impl FromStr for RoutingLabel {
    type Err = UnknownLabel;

    /// Strict: only the exact upper-case spelling parses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Result of normalising classifier output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Output named one of the labels
    Recognized(RoutingLabel),
    /// Output was outside the label set; routed to [`RoutingLabel::DEFAULT`]
    Fallback {
        /// Raw model output, before normalisation
        raw: String,
    },
}

impl Classification {
    /// Normalise raw model output: trim, upper-case, then match exactly.
    ///
    /// Anything else, verbose answers included, becomes [`Classification::Fallback`].
    pub fn from_model_output(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        match normalized.parse::<RoutingLabel>() {
            Ok(label) => Self::Recognized(label),
            Err(_) => Self::Fallback {
                raw: raw.to_string(),
            },
        }
    }

    /// The label the workflow routes on
    pub fn label(&self) -> RoutingLabel {
        match self {
            Self::Recognized(label) => *label,
            Self::Fallback { .. } => RoutingLabel::DEFAULT,
        }
    }

    /// Whether the default label was substituted
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_labels_are_recognized() {
        for label in RoutingLabel::ALL {
            assert_eq!(
                Classification::from_model_output(label.as_str()),
                Classification::Recognized(label)
            );
        }
    }

    #[test]
    fn test_whitespace_and_case_are_normalized() {
        let c = Classification::from_model_output("  scientist  ");
        assert_eq!(c, Classification::Recognized(RoutingLabel::Scientist));

        let c = Classification::from_model_output("\nCoder\n");
        assert_eq!(c, Classification::Recognized(RoutingLabel::Coder));

        let c = Classification::from_model_output("creative");
        assert_eq!(c.label(), RoutingLabel::Creative);
        assert!(!c.is_fallback());
    }

    #[test]
    fn test_out_of_set_output_falls_back_to_scientist() {
        for raw in ["", "   ", "UNKNOWN", "CODER.", "I think CREATIVE", "SCIENTIST CODER"] {
            let c = Classification::from_model_output(raw);
            assert!(c.is_fallback(), "{raw:?} should fall back");
            assert_eq!(c.label(), RoutingLabel::Scientist);
            assert_eq!(c, Classification::Fallback { raw: raw.to_string() });
        }
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("CODER".parse::<RoutingLabel>(), Ok(RoutingLabel::Coder));
        assert_eq!(
            "coder".parse::<RoutingLabel>(),
            Err(UnknownLabel("coder".to_string()))
        );
    }

    #[test]
    fn test_label_serializes_upper_case() {
        assert_eq!(
            serde_json::to_value(RoutingLabel::Creative).unwrap(),
            serde_json::json!("CREATIVE")
        );
        assert_eq!(RoutingLabel::Coder.to_string(), "CODER");
    }
}

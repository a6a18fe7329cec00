//! Routing from a supervisor decision to the specialist node that handles it

use crate::orchestrator::label::RoutingLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Specialist node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialistId {
    /// `scientist` node
    Scientist,
    /// `creative` node
    Creative,
    /// `coder` node
    Coder,
}

impl SpecialistId {
    /// Node name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scientist => "scientist",
            Self::Creative => "creative",
            Self::Coder => "coder",
        }
    }
}

impl fmt::Display for SpecialistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RoutingLabel> for SpecialistId {
    fn from(label: RoutingLabel) -> Self {
        match label {
            RoutingLabel::Scientist => Self::Scientist,
            RoutingLabel::Creative => Self::Creative,
            RoutingLabel::Coder => Self::Coder,
        }
    }
}

/// Pick the specialist for the label written by the supervisor step.
///
/// An unset label takes the default branch, the same target the supervisor
/// falls back to.
pub fn route(label: Option<RoutingLabel>) -> SpecialistId {
    match label {
        Some(label) => SpecialistId::from(label),
        None => SpecialistId::from(RoutingLabel::DEFAULT),
    }
}

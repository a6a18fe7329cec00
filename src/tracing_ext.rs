//! Tracing and observability infrastructure

use crate::error::{Error, Result};
use crate::types::TokenUsage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "agent_switchboard=info,tower_http=info";

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Fails if a global
/// subscriber was already installed.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| Error::Tracing(e.to_string()))
}

/// Kind of workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Classification by the supervisor
    Supervisor,
    /// Generation by a specialist
    Specialist,
}

/// Record of one executed workflow step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step kind
    pub kind: StepKind,
    /// Node name (`supervisor`, `scientist`, ...)
    pub name: String,
    /// Start timestamp
    pub started_at: DateTime<Utc>,
    /// Wall time spent in the step
    pub duration_ms: u64,
    /// Tokens consumed by the step
    pub usage: TokenUsage,
}

/// Measures a step while it runs
pub(crate) struct StepTimer {
    kind: StepKind,
    name: String,
    started_at: DateTime<Utc>,
    start: Instant,
}

impl StepTimer {
    pub(crate) fn start(kind: StepKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            started_at: Utc::now(),
            start: Instant::now(),
        }
    }

    pub(crate) fn finish(self, usage: TokenUsage) -> StepRecord {
        StepRecord {
            kind: self.kind,
            name: self.name,
            started_at: self.started_at,
            duration_ms: self.start.elapsed().as_millis() as u64,
            usage,
        }
    }
}

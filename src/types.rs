//! Shared types used across resourcedump.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the work-order plan is written to standard output.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PlanFormat {
    /// `<nominal path> -> <output path>`, one per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl std::fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlanFormat::Text => "text",
            PlanFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

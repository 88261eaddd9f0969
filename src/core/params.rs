use serde::{Deserialize, Serialize};

use crate::types::PlanFormat;

/// Processing options suitable for presets and config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DumpParams {
    pub format: PlanFormat,
    /// Continue with remaining work orders after one fails
    pub keep_going: bool,
}

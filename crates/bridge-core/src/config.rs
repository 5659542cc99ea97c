//! Bridge configuration.

use serde::{Deserialize, Serialize};

/// Number of descendants that finalize a header by default.
pub const DEFAULT_CONFIRMATION_DEPTH: u64 = 3;

/// Bridge configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// A header is finalized once an unbroken parent chain of this many
    /// additional headers is built directly on top of it.
    pub confirmation_depth: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            confirmation_depth: DEFAULT_CONFIRMATION_DEPTH,
        }
    }
}

//! Assistant panel configuration.

use serde::{Deserialize, Serialize};

const fn default_reply_delay_ms() -> u64 {
    1500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// Pause between a user message and the canned reply.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

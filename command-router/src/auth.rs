//! Single-identity sender allow-list.

use cmdbot_core::Sender;

/// Admits only messages whose sender id equals the configured identity. No roles, no wildcards.
#[derive(Debug, Clone)]
pub struct SenderAllowList {
    allowed: String,
}

impl SenderAllowList {
    pub fn new(allowed: impl Into<String>) -> Self {
        Self {
            allowed: allowed.into().trim().to_string(),
        }
    }

    pub fn permits(&self, sender: &Sender) -> bool {
        !self.allowed.is_empty() && sender.id.trim() == self.allowed
    }
}

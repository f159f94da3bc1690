//! Process-wide validation settings
//!
//! The only global state in the crate. Reads are lock-free through an
//! [`ArcSwap`]; writers replace the whole configuration at once.
//!
//! ```rust,ignore
//! use nebula_shape::config::{self, ValidationConfig};
//!
//! // Skip constraints everywhere, keep type checks.
//! config::set_global_validation_enabled(false);
//! assert!(!ValidationConfig::current().enabled);
//! ```

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::Deserialize;

static GLOBAL_CONFIG: LazyLock<ArcSwap<ValidationConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(ValidationConfig::default()));

/// Global validation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Whether validators run their constraint chains. Type checks always run.
    pub enabled: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ValidationConfig {
    /// Installs this configuration process-wide, replacing the previous one.
    pub fn install(self) {
        tracing::debug!(enabled = self.enabled, "installing validation config");
        GLOBAL_CONFIG.store(Arc::new(self));
    }

    /// Returns a snapshot of the installed configuration.
    #[inline]
    #[must_use]
    pub fn current() -> Self {
        **GLOBAL_CONFIG.load()
    }
}

/// Toggles constraint execution for every validator without an instance override.
pub fn set_global_validation_enabled(enabled: bool) {
    ValidationConfig { enabled }.install();
}

#[inline]
#[must_use]
pub fn global_validation_enabled() -> bool {
    GLOBAL_CONFIG.load().enabled
}

//! `[search]` section: fuzzy matching parameters.
//!
//! ```toml
//! [search]
//! threshold = 0.35        # 0.0 = exact only, 1.0 = match anything
//! distance = 100          # How far from the start a match may drift
//! ignore_location = false # Score matches anywhere equally
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub threshold: f64,
    pub distance: usize,
    pub ignore_location: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.35,
            distance: 100,
            ignore_location: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(0.0..=1.0).contains(&self.threshold) {
            diag.error_with_hint(
                "search.threshold",
                format!("{} is out of range", self.threshold),
                "use a value between 0.0 and 1.0",
            );
        }
    }
}

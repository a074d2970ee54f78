//! Helper functions for listings and templates

mod date;

pub use date::*;

use crate::config::SiteConfig;

/// Display helpers bound to a site's settings
pub struct Helpers {
    current_year: i32,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            current_year: current_year(&config.timezone),
        }
    }

    /// Helpers evaluated as if it were `year`
    pub fn for_year(year: i32) -> Self {
        Self { current_year: year }
    }

    /// Format a front-matter date, falling back to the raw text when it
    /// cannot be parsed
    pub fn date(&self, raw: &str) -> String {
        format_date_str(raw, self.current_year).unwrap_or_else(|| raw.to_string())
    }
}

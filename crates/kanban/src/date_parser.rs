// File: src/date_parser.rs
// Purpose: Accepted date and date-time input formats

use crate::config::DatesConfig;

const ISO_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y_%m_%d"];
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%I:%M %p"];

/// Builds the format lists that date rules accept
#[derive(Debug, Clone)]
pub struct DateParser {
    date_format: String,
    accept_iso: bool,
}

impl DateParser {
    pub fn new(date_format: impl Into<String>, accept_iso: bool) -> Self {
        Self {
            date_format: date_format.into(),
            accept_iso,
        }
    }

    pub fn from_config(config: &DatesConfig) -> Self {
        Self::new(config.date_format.clone(), config.accept_iso)
    }

    /// Date formats: the configured one first, then ISO variants when enabled
    pub fn date_formats(&self) -> Vec<String> {
        let mut formats = vec![self.date_format.clone()];

        if self.accept_iso {
            for iso in ISO_DATE_FORMATS {
                if !formats.iter().any(|f| f == iso) {
                    formats.push(iso.to_string());
                }
            }
        }

        formats
    }

    pub fn time_formats(&self) -> Vec<String> {
        TIME_FORMATS.iter().map(|f| f.to_string()).collect()
    }

    /// Every date format combined with every time format
    pub fn date_time_formats(&self) -> Vec<String> {
        self.date_formats()
            .iter()
            .flat_map(|date| {
                TIME_FORMATS
                    .iter()
                    .map(move |time| format!("{} {}", date, time))
            })
            .collect()
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::from_config(&DatesConfig::default())
    }
}

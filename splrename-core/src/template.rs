//! Filename templating for bulk renames.
//!
//! A template is a plain string carrying zero or more placeholder tokens:
//! `[V]` vessel name, `[LN]` SPL line name, `[ST]` sensor type, `[SD]`
//! sensor start time, `[N]` duplicate sequence number. Resolution is pure
//! string work; no filesystem access happens here.

use crate::config::RunConfig;
use crate::error::AppError;
use crate::record::RenameRecord;
use regex::{Captures, Regex};
use std::sync::OnceLock;

const TOKEN_PATTERN: &str = r"\[(?:V|LN|ST|SD|N)\]";

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

#[derive(Debug, Clone)]
pub struct FilenameTemplate {
    raw: String,
    has_seq_token: bool,
}

impl FilenameTemplate {
    /// Build a template from the user-supplied filename string.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::MissingTemplate);
        }
        Ok(Self {
            raw: raw.to_string(),
            has_seq_token: raw.contains("[N]"),
        })
    }

    /// Resolve the template into the new file stem (no extension).
    ///
    /// When the template carries no `[N]` token and the record has a
    /// duplicate index, a `_NNN` suffix with a fixed 3-digit width is
    /// appended regardless of `config.seq_width`; the configured width
    /// only applies where `[N]` appears explicitly.
    pub fn resolve(&self, record: &RenameRecord, config: &RunConfig) -> String {
        let sensor_start = record.sensor_start.format(&config.time_format).to_string();
        let sequence = record
            .duplicate_index
            .map(|n| format!("{:0width$}", n, width = config.seq_width));

        let mut name = token_regex()
            .replace_all(&self.raw, |caps: &Captures| {
                match caps.get(0).map_or("", |m| m.as_str()) {
                    "[V]" => record.vessel.as_str(),
                    "[LN]" => record.line_name.as_str(),
                    "[ST]" => record.sensor_type.as_str(),
                    "[SD]" => sensor_start.as_str(),
                    "[N]" => sequence.as_deref().unwrap_or(""),
                    _ => "",
                }
                .to_string()
            })
            .into_owned();

        if !self.has_seq_token {
            if let Some(n) = record.duplicate_index {
                name.push_str(&format!("_{n:03}"));
            }
        }

        tidy(&name)
    }
}

/// Clean up resolution artifacts: doubled separators from empty tokens and
/// the literal `_None` left behind by a missing duplicate index.
fn tidy(name: &str) -> String {
    name.replace("__", "_").replace("_None", "")
}

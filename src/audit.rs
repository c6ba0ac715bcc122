//! JSONL audit logging for suppression-guard
//!
//! Records every verdict to a JSONL file for later analysis.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::Request;
use crate::output::Verdict;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Admitted,
    Rejected,
    Warn,
    Matched,
    Unmatched,
    Disabled,
    Error,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the verdict
    pub timestamp: DateTime<Utc>,

    /// Log level (ADMITTED, REJECTED, WARN, MATCHED, UNMATCHED, DISABLED)
    pub level: LogLevel,

    /// Check that fired (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,

    /// Summary of the request
    pub input_summary: String,

    /// Reason for the verdict
    pub reason: String,
}

impl AuditEntry {
    /// Create an audit entry from a validation request and verdict
    pub fn from_verdict(request: &Request, verdict: &Verdict, disabled: bool) -> Self {
        let (level, check, reason) = if disabled {
            (
                LogLevel::Disabled,
                None,
                "SUPPRESSION_GUARD_DISABLED".to_string(),
            )
        } else {
            match verdict {
                Verdict::Admit { reason } => (LogLevel::Admitted, None, reason.clone()),
                Verdict::Reject { check, reason } => {
                    (LogLevel::Rejected, Some(check.clone()), reason.clone())
                }
                Verdict::Warn { check, reason } => {
                    (LogLevel::Warn, Some(check.clone()), reason.clone())
                }
            }
        };

        Self {
            timestamp: Utc::now(),
            level,
            check,
            input_summary: request.summary(),
            reason,
        }
    }

    /// Create an audit entry from a match request and outcome
    pub fn from_match(request: &Request, matched: bool) -> Self {
        let (level, reason) = if matched {
            (LogLevel::Matched, "rule applies to finding".to_string())
        } else {
            (LogLevel::Unmatched, "rule does not apply".to_string())
        };

        Self {
            timestamp: Utc::now(),
            level,
            check: None,
            input_summary: request.summary(),
            reason,
        }
    }
}

/// Audit logger
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` disables logging
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a validation verdict
    pub fn log_verdict(
        &mut self,
        request: &Request,
        verdict: &Verdict,
        disabled: bool,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::from_verdict(request, verdict, disabled);
        self.log(&entry)
    }

    /// Log a match outcome
    pub fn log_match(&mut self, request: &Request, matched: bool) -> Result<(), std::io::Error> {
        let entry = AuditEntry::from_match(request, matched);
        self.log(&entry)
    }
}

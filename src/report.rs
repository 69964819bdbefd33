//! Elapsed-time reports printed by the CLI, as text or JSON.

use crate::format::format_duration;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;

/// One elapsed-time measurement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ElapsedReport {
    pub friendly: String,
    pub elapsed_ns: u64,
    pub elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ElapsedReport {
    pub fn new(elapsed: Duration) -> Self {
        ElapsedReport {
            friendly: format_duration(elapsed),
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            elapsed_secs: elapsed.as_secs_f64(),
            program: None,
            exit_code: None,
        }
    }

    /// Attaches the finished program and its exit code.
    pub fn for_program(mut self, program: impl Into<String>, exit_code: Option<i32>) -> Self {
        self.program = Some(program.into());
        self.exit_code = exit_code;
        self
    }

    /// Writes the report as a single line: the JSON object, or the plain text form.
    pub fn write_to<W: Write>(&self, json: bool, mut writer: W) -> io::Result<()> {
        if json {
            serde_json::to_writer(&mut writer, self)?;
            writeln!(writer)
        } else {
            match &self.program {
                Some(program) => writeln!(writer, "{program} finished in {}", self.friendly),
                None => writeln!(writer, "{}", self.friendly),
            }
        }
    }
}

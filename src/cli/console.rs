//! Console output for engine results

use crate::cli::commands::OutputFormat;
use crate::engine::ResultSink;
use crate::types::Character;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;

/// Prints results to stdout and failures to stderr
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    /// Create a sink writing in `format`
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render records the way `present` prints them
    pub fn render(&self, records: &[Character], note: Option<&str>) -> String {
        let mut out = String::new();
        match self.format {
            OutputFormat::Json => {
                for record in records {
                    if let Err(e) = push_json_line(&mut out, record) {
                        warn!("Skipping character {}: {e}", record.id);
                    }
                }
            }
            OutputFormat::Pretty => {
                for record in records {
                    render_card(&mut out, record);
                }
                if let Some(note) = note {
                    let _ = writeln!(out, "{note}");
                }
            }
        }
        out
    }
}

/// Append `value` as one JSON line; nothing is written on failure
fn push_json_line<T: Serialize>(out: &mut String, value: &T) -> serde_json::Result<()> {
    let line = serde_json::to_string(value)?;
    out.push_str(&line);
    out.push('\n');
    Ok(())
}

fn render_card(out: &mut String, record: &Character) {
    let _ = writeln!(out, "#{} {} [{}]", record.id, record.name, record.status);
    let _ = writeln!(out, "  Species: {}", record.species);
    let _ = writeln!(out, "  Gender:  {}", record.gender);
    if let Some(subtype) = record.subtype() {
        let _ = writeln!(out, "  Type:    {subtype}");
    }
    let _ = writeln!(out, "  Origin:  {}", record.origin.name);
    let _ = writeln!(out, "  Image:   {}", record.image);
    out.push('\n');
}

impl ResultSink for ConsoleSink {
    fn present(&self, records: &[Character], note: Option<&str>) {
        print!("{}", self.render(records, note));
        // JSON lines stay machine-readable; the note goes to stderr
        if self.format == OutputFormat::Json {
            if let Some(note) = note {
                eprintln!("{note}");
            }
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn morty() -> Character {
        serde_json::from_value(json!({
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": {"name": "unknown", "url": ""},
            "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg"
        }))
        .unwrap()
    }

    #[test]
    fn test_render_pretty() {
        let sink = ConsoleSink::new(OutputFormat::Pretty);
        let out = sink.render(&[morty()], Some("Loaded 1 character(s)"));

        assert!(out.starts_with("#2 Morty Smith [Alive]\n"));
        assert!(out.contains("  Gender:  Male\n"));
        assert!(out.contains("  Origin:  unknown\n"));
        assert!(!out.contains("Type:"));
        assert!(out.ends_with("Loaded 1 character(s)\n"));
    }

    #[test]
    fn test_render_pretty_with_subtype() {
        let mut record = morty();
        record.subtype = "Clone".to_string();
        let out = ConsoleSink::new(OutputFormat::Pretty).render(&[record], None);
        assert!(out.contains("  Type:    Clone\n"));
    }

    #[test]
    fn test_render_json_lines() {
        let sink = ConsoleSink::new(OutputFormat::Json);
        let out = sink.render(&[morty(), morty()], Some("ignored"));

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["name"], "Morty Smith");
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn test_json_line_failure_writes_nothing() {
        // Non-string map keys cannot be represented in JSON
        let unserializable: std::collections::HashMap<(u8, u8), u8> = [((1, 2), 3)].into();

        let mut out = String::from("{\"id\":1}\n");
        assert!(push_json_line(&mut out, &unserializable).is_err());
        assert_eq!(out, "{\"id\":1}\n");

        push_json_line(&mut out, &morty()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().all(|line| !line.is_empty()));
    }

    #[test]
    fn test_render_empty() {
        let out = ConsoleSink::new(OutputFormat::Pretty).render(&[], Some("No characters found"));
        assert_eq!(out, "No characters found\n");
    }
}

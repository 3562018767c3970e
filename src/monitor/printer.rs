//! Formatting of monitor output lines

use super::session::{EntryKind, MonitorEntry};
use crossterm::style::{style, Color, Stylize};
use serde_derive::Serialize;

#[derive(Debug, Copy, Clone, Default)]
pub struct PrintOptions {
    pub color: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    local_time: Option<&'a str>,
    timestamp: f64,
    delta: f64,
    bit_length: u8,
    value: u32,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub struct Printer {
    options: PrintOptions,
}

impl Printer {
    pub fn new(options: PrintOptions) -> Printer {
        Printer { options }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.options.color {
            style(text).with(color).to_string()
        } else {
            text
        }
    }

    /// One output line for `entry`, `local_time` is prefixed when given
    pub fn line(&self, entry: &MonitorEntry, local_time: Option<&str>) -> String {
        if self.options.json {
            return self.json_line(entry, local_time);
        }
        let mut out = String::new();
        if let Some(t) = local_time {
            out += &self.paint(format!("{} | ", t), Color::Yellow);
        }
        out += &self.paint(
            format!(
                "{:.3} | {:8.3} | {:<6} | ",
                entry.frame.timestamp,
                entry.delta,
                entry.frame.hex()
            ),
            Color::Green,
        );
        out += &match &entry.kind {
            EntryKind::Command(cmd) => self.paint(cmd.to_string(), Color::White),
            EntryKind::Status(status) => self.paint(status.message(), Color::Red),
            EntryKind::Invalid(e) => self.paint(format!("ERROR: {}", e), Color::Red),
        };
        out
    }

    fn json_line(&self, entry: &MonitorEntry, local_time: Option<&str>) -> String {
        let mut json = JsonEntry {
            local_time,
            timestamp: entry.frame.timestamp,
            delta: entry.delta,
            bit_length: entry.frame.bit_length,
            value: entry.frame.value,
            kind: "command",
            address: None,
            command: None,
            message: None,
        };
        match &entry.kind {
            EntryKind::Command(cmd) => {
                json.address = Some(cmd.address_label.trim_end());
                json.command = Some(&cmd.command_text);
            }
            EntryKind::Status(status) => {
                json.kind = "error";
                json.message = Some(status.message());
            }
            EntryKind::Invalid(e) => {
                json.kind = "error";
                json.message = Some(e.to_string());
            }
        }
        // Serializing plain strings and numbers can't fail
        serde_json::to_string(&json).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::{PrintOptions, Printer};
    use crate::monitor::frame::{FrameStatus, RawFrame};
    use crate::monitor::session::MonitorSession;

    fn frame(timestamp: f64, bit_length: u8, value: u32, status: FrameStatus) -> RawFrame {
        RawFrame {
            bit_length,
            value,
            timestamp,
            status,
        }
    }

    #[test]
    fn plain_test() {
        let printer = Printer::new(PrintOptions::default());
        let mut session = MonitorSession::default();
        let entry = session.process(&frame(1.0, 16, 0xff00, FrameStatus::Frame));
        assert_eq!(
            printer.line(&entry, None),
            "1.000 |    0.000 | FF00   | BC GEAR       OFF"
        );
        let entry = session.process(&frame(1.25, 0, 0, FrameStatus::Timing));
        assert_eq!(
            printer.line(&entry, Some("12:00:00")),
            "12:00:00 | 1.250 |    0.250 |        | ERROR: TIMING"
        );
    }

    #[test]
    fn json_test() {
        let printer = Printer::new(PrintOptions {
            color: false,
            json: true,
        });
        let mut session = MonitorSession::default();
        let entry = session.process(&frame(0.5, 8, 0x12, FrameStatus::Frame));
        let v: serde_json::Value = serde_json::from_str(&printer.line(&entry, None)).unwrap();
        assert_eq!(v["kind"], "command");
        assert_eq!(v["address"], "");
        assert_eq!(v["command"], "DATA 0x12");
        assert_eq!(v["value"], 0x12);
        assert!(v.get("local_time").is_none());
    }

    #[test]
    fn color_test() {
        let printer = Printer::new(PrintOptions {
            color: true,
            json: false,
        });
        let mut session = MonitorSession::default();
        let entry = session.process(&frame(0.0, 8, 0x12, FrameStatus::Frame));
        let line = printer.line(&entry, None);
        assert!(line.contains("DATA 0x12"));
        assert!(line.contains("0.000 |    0.000 | 12"));
    }
}

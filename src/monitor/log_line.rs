//! Text format written by the bus interface, one entry per line:
//!
//! `{TTTTTTTT<k>LL DDDDDDDD}`
//!
//! `T` timestamp in ms, `k` entry kind, `L` bit length (or error code) and
//! `D` frame value, all in hex. Anything outside the braces is ignored.

use super::frame::{FrameStatus, RawFrame};
use std::fmt;

pub const KIND_FRAME: char = '-';
pub const KIND_LOOPBACK: char = '>';
pub const KIND_OK: char = '+';
pub const KIND_ERROR: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingBraces,
    TooShort(usize),
    InvalidHex(&'static str),
    UnknownKind(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingBraces => write!(f, "No {{...}} entry in line"),
            ParseError::TooShort(len) => write!(f, "Entry too short ({} characters)", len),
            ParseError::InvalidHex(field) => write!(f, "Invalid hex digits in {}", field),
            ParseError::UnknownKind(c) => write!(f, "Unknown entry kind '{}'", c),
        }
    }
}

impl std::error::Error for ParseError {}

fn hex_field(s: &str, field: &'static str) -> Result<u32, ParseError> {
    u32::from_str_radix(s, 16).map_err(|_| ParseError::InvalidHex(field))
}

pub fn parse(line: &str) -> Result<RawFrame, ParseError> {
    let start = line.find('{').ok_or(ParseError::MissingBraces)? + 1;
    let end = line[start..].find('}').ok_or(ParseError::MissingBraces)? + start;
    let payload = &line[start..end];
    if payload.len() < 20 || !payload.is_ascii() {
        return Err(ParseError::TooShort(payload.len()));
    }
    let timestamp = hex_field(&payload[0..8], "timestamp")?;
    let kind = payload[8..].chars().next().unwrap_or(' ');
    let length = hex_field(&payload[9..11], "length")? as u8;
    let value = hex_field(payload[12..20].trim(), "data")?;
    let (bit_length, status) = match kind {
        KIND_FRAME => (length, FrameStatus::Frame),
        KIND_LOOPBACK => (length, FrameStatus::Loopback),
        KIND_OK => (length, FrameStatus::Ok),
        KIND_ERROR => (0, FrameStatus::from_error_code(length)),
        c => return Err(ParseError::UnknownKind(c)),
    };
    Ok(RawFrame {
        bit_length,
        value,
        timestamp: f64::from(timestamp) / 1000.0,
        status,
    })
}

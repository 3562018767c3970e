use serde_derive::Serialize;
use std::fmt;

/// Classification of an entry reported by the bus interface
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum FrameStatus {
    /// Frame sent by the interface and acknowledged
    Ok,
    /// Frame received from the bus
    Frame,
    /// Frame sent by the interface, read back from the bus
    Loopback,
    Timeout,
    Timing,
    Collision,
    BusFailure,
    BusRecovered,
    General(u8),
}

impl FrameStatus {
    /// Error codes used in the log format
    pub fn from_error_code(code: u8) -> FrameStatus {
        match code {
            0x01 => FrameStatus::Timeout,
            0x02 => FrameStatus::Timing,
            0x03 => FrameStatus::Collision,
            0x04 => FrameStatus::BusFailure,
            0x05 => FrameStatus::BusRecovered,
            c => FrameStatus::General(c),
        }
    }

    /// True if the entry holds a frame that can be decoded
    pub fn is_frame(&self) -> bool {
        matches!(
            self,
            FrameStatus::Ok | FrameStatus::Frame | FrameStatus::Loopback
        )
    }

    pub fn message(&self) -> String {
        match self {
            FrameStatus::Ok => "OK".to_string(),
            FrameStatus::Frame => "FRAME".to_string(),
            FrameStatus::Loopback => "LOOPBACK".to_string(),
            FrameStatus::Timeout => "ERROR: TIMEOUT".to_string(),
            FrameStatus::Timing => "ERROR: TIMING".to_string(),
            FrameStatus::Collision => "ERROR: COLLISION DETECTED".to_string(),
            FrameStatus::BusFailure => "ERROR: SYSTEM FAILURE".to_string(),
            FrameStatus::BusRecovered => "SYSTEM RECOVERED".to_string(),
            FrameStatus::General(code) => format!("ERROR: CODE 0x{:02X}", code),
        }
    }
}

impl fmt::Display for FrameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// One entry captured from the bus
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RawFrame {
    pub bit_length: u8,
    pub value: u32,
    /// Seconds
    pub timestamp: f64,
    pub status: FrameStatus,
}

impl RawFrame {
    /// Frame value as hex with as many digits as the frame has bytes
    pub fn hex(&self) -> String {
        match self.bit_length {
            0 => String::new(),
            bits => {
                let digits = usize::from(bits).div_ceil(4);
                format!("{:0digits$X}", self.value, digits = digits)
            }
        }
    }
}

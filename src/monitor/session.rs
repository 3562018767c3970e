use super::frame::{FrameStatus, RawFrame};
use crate::base::device_type::DeviceTypeContext;
use crate::decode::{DecodedCommand, Decoder};
use crate::error::DecodeError;
use log::{debug, warn};

/// What happened to one entry from the bus
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Command(DecodedCommand),
    /// Error reported by the interface instead of a frame
    Status(FrameStatus),
    /// Frame the decoder doesn't accept, e.g. a 25 bit frame
    Invalid(DecodeError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorEntry {
    pub frame: RawFrame,
    /// Seconds since the previous entry, 0 for the first one
    pub delta: f64,
    pub kind: EntryKind,
}

/// State carried from one frame to the next on a single bus
#[derive(Debug, Clone, Default)]
pub struct MonitorSession {
    decoder: Decoder,
    last_timestamp: Option<f64>,
    context: DeviceTypeContext,
}

impl MonitorSession {
    pub fn new(decoder: Decoder) -> MonitorSession {
        MonitorSession {
            decoder,
            last_timestamp: None,
            context: DeviceTypeContext::None,
        }
    }

    pub fn context(&self) -> DeviceTypeContext {
        self.context
    }

    /// Frames must be processed in the order they appeared on the bus
    pub fn process(&mut self, frame: &RawFrame) -> MonitorEntry {
        let delta = match self.last_timestamp {
            Some(last) => frame.timestamp - last,
            None => 0.0,
        };
        self.last_timestamp = Some(frame.timestamp);
        let kind = if frame.status.is_frame() {
            match self
                .decoder
                .decode(frame.bit_length, frame.value, self.context)
            {
                Ok(cmd) => {
                    if cmd.next_context != self.context {
                        debug!("Device type context {} -> {}", self.context, cmd.next_context);
                    }
                    self.context = cmd.next_context;
                    EntryKind::Command(cmd)
                }
                Err(e) => {
                    warn!("Can't decode frame: {}", e);
                    EntryKind::Invalid(e)
                }
            }
        } else {
            EntryKind::Status(frame.status)
        };
        MonitorEntry {
            frame: *frame,
            delta,
            kind,
        }
    }
}

//! Frame decoding, one decoder per frame length.

pub mod backward;
pub mod control;
pub mod gear;

use crate::base::device_type::DeviceTypeContext;
use crate::error::DecodeError;
use serde_derive::Serialize;
use std::fmt;

/// A frame rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedCommand {
    /// Padded to the width configured for the frame length
    pub address_label: String,
    pub command_text: String,
    /// Context to decode the following frame with
    pub next_context: DeviceTypeContext,
}

impl DecodedCommand {
    pub fn new(
        address_label: String,
        command_text: String,
        next_context: DeviceTypeContext,
    ) -> DecodedCommand {
        DecodedCommand {
            address_label,
            command_text,
            next_context,
        }
    }
}

impl fmt::Display for DecodedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.address_label, self.command_text)
    }
}

/// Width of the address column for each frame length
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    pub width_backward: usize,
    pub width_gear: usize,
    pub width_control: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            width_backward: 14,
            width_gear: 14,
            width_control: 10,
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Decoder {
        Decoder { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a frame of `bit_length` bits.
    ///
    /// Only fails for frame lengths other than 8, 16 and 24 bits, or a
    /// value that doesn't fit in the frame. Every legal value decodes to
    /// something, undefined codes included.
    pub fn decode(
        &self,
        bit_length: u8,
        value: u32,
        context: DeviceTypeContext,
    ) -> Result<DecodedCommand, DecodeError> {
        if !matches!(bit_length, 8 | 16 | 24) {
            return Err(DecodeError::UnsupportedFrameLength(bit_length));
        }
        if value >> bit_length != 0 {
            return Err(DecodeError::ValueOutOfRange { bit_length, value });
        }
        Ok(match bit_length {
            8 => backward::decode(value as u8, context, self.config.width_backward),
            16 => gear::decode(value as u16, context, self.config.width_gear),
            _ => control::decode(value, context, self.config.width_control),
        })
    }
}

use std::fmt;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Decoder called with input outside its contract
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeError {
    UnsupportedFrameLength(u8),
    ValueOutOfRange { bit_length: u8, value: u32 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedFrameLength(bits) => {
                write!(f, "Unsupported frame length: {} bits", bits)
            }
            DecodeError::ValueOutOfRange { bit_length, value } => {
                write!(
                    f,
                    "Value 0x{:X} does not fit in a {} bit frame",
                    value, bit_length
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

//! Special commands of IEC 62386-102 (table 16). The address byte selects
//! the command and the opcode byte carries its data.

use crate::base::device_type::{DeviceType, DeviceTypeContext};
use crate::common::opcode::data_byte;
use crate::common::special;

pub const TERMINATE: u8 = 0xa1;
pub const DTR0: u8 = 0xa3;
pub const INITIALISE: u8 = 0xa5;
pub const RANDOMISE: u8 = 0xa7;
pub const COMPARE: u8 = 0xa9;
pub const WITHDRAW: u8 = 0xab;
pub const PING: u8 = 0xad;
pub const SEARCHADDRH: u8 = 0xb1;
pub const SEARCHADDRM: u8 = 0xb3;
pub const SEARCHADDRL: u8 = 0xb5;
pub const PROGRAM_SHORT_ADDRESS: u8 = 0xb7;
pub const VERIFY_SHORT_ADDRESS: u8 = 0xb9;
pub const QUERY_SHORT_ADDRESS: u8 = 0xbb;
pub const ENABLE_DEVICE_TYPE: u8 = 0xc1;
pub const DTR1: u8 = 0xc3;
pub const DTR2: u8 = 0xc5;
pub const WRITE_MEMORY_LOCATION: u8 = 0xc7;
pub const WRITE_MEMORY_LOCATION_NO_REPLY: u8 = 0xc9;

fn invalid_data(name: &str, data: u8) -> String {
    format!("--- {} INVALID DATA 0x{:02X}", name, data)
}

// Commands that only accept 0x00 as data
fn no_data(name: &str, data: u8) -> String {
    if data == 0x00 {
        name.to_string()
    } else {
        invalid_data(name, data)
    }
}

// Short address encoded as 0AAAAAA1, or 0xff to delete it
fn short_address_data(name: &str, data: u8) -> String {
    match data {
        0xff => format!("{} (MASK)", name),
        d if d <= 0x7f && d & 0x01 == 1 => format!("{} (G{:02})", name, d >> 1),
        d => invalid_data(name, d),
    }
}

/// Decode a special command.
///
/// Returns the command text and the context for the next frame, which is
/// only set by ENABLE DEVICE TYPE.
pub fn decode(address: u8, data: u8) -> (String, DeviceTypeContext) {
    let text = match address {
        TERMINATE => no_data("TERMINATE", data),
        DTR0 => format!("DTR0 {}", data_byte(data)),
        INITIALISE => special::initialise(data),
        RANDOMISE => no_data("RANDOMISE", data),
        COMPARE => no_data("COMPARE", data),
        WITHDRAW => no_data("WITHDRAW", data),
        PING => no_data("PING", data),
        SEARCHADDRH => special::search_address('H', data),
        SEARCHADDRM => special::search_address('M', data),
        SEARCHADDRL => special::search_address('L', data),
        PROGRAM_SHORT_ADDRESS => short_address_data("PROGRAM SHORT ADDRESS", data),
        VERIFY_SHORT_ADDRESS => short_address_data("VERIFY SHORT ADDRESS", data),
        QUERY_SHORT_ADDRESS => no_data("QUERY SHORT ADDRESS", data),
        ENABLE_DEVICE_TYPE => {
            return (
                format!("ENABLE DEVICE TYPE {}", data),
                DeviceTypeContext::Enabled(DeviceType::new(data)),
            );
        }
        DTR1 => format!("DTR1 {}", data_byte(data)),
        DTR2 => format!("DTR2 {}", data_byte(data)),
        WRITE_MEMORY_LOCATION => special::write_memory_location(data, true),
        WRITE_MEMORY_LOCATION_NO_REPLY => special::write_memory_location(data, false),
        _ => "RESERVED".to_string(),
    };
    (text, DeviceTypeContext::None)
}

//! Special commands of IEC 62386-103 (table 22)

use crate::common::opcode::{data_byte, undefined};
use crate::common::special;

pub const SPECIAL: u8 = 0xc1;
pub const DIRECT_WRITE_MEMORY: u8 = 0xc5;
pub const DTR1_DTR0: u8 = 0xc7;
pub const DTR2_DTR1: u8 = 0xc9;

fn unknown(address: u8) -> String {
    undefined(address, "UNKNOWN CONTROL DEVICE SPECIAL COMMAND")
}

fn with_data(name: &str, data: u8) -> String {
    format!("{} (0x{:02X}) = {}", name, data, data)
}

/// Commands sharing address byte 0xc1, selected by the instance byte
fn special_command(instance: u8, opcode: u8) -> Option<String> {
    Some(match instance {
        0x00 => "TERMINATE".to_string(),
        0x01 => special::initialise(opcode),
        0x02 => "RANDOMISE".to_string(),
        0x03 => "COMPARE".to_string(),
        0x04 => "WITHDRAW".to_string(),
        0x05 => special::search_address('H', opcode),
        0x06 => special::search_address('M', opcode),
        0x07 => special::search_address('L', opcode),
        0x08 => with_data("PROGRAM SHORT ADDRESS", opcode),
        0x09 => with_data("VERIFY SHORT ADDRESS", opcode),
        0x0a => "QUERY SHORT ADDRESS".to_string(),
        0x20 => special::write_memory_location(opcode, true),
        0x21 => special::write_memory_location(opcode, false),
        0x30 => format!("DTR0 {}", data_byte(opcode)),
        0x31 => format!("DTR1 {}", data_byte(opcode)),
        0x32 => format!("DTR2 {}", data_byte(opcode)),
        0x33 => with_data("SEND TESTFRAME", opcode),
        _ => return None,
    })
}

pub fn decode(address: u8, instance: u8, opcode: u8) -> String {
    match address {
        SPECIAL => special_command(instance, opcode).unwrap_or_else(|| unknown(address)),
        DIRECT_WRITE_MEMORY => format!(
            "DIRECT WRITE MEMORY (DTR0,0x{:02X}) : 0x{:02X}",
            instance, opcode
        ),
        DTR1_DTR0 => format!("DTR1:DTR0 (0x{:02X},0x{:02X})", instance, opcode),
        DTR2_DTR1 => format!("DTR2:DTR1 (0x{:02X},0x{:02X})", instance, opcode),
        _ => unknown(address),
    }
}

// Rendering shared by the special commands of IEC 62386-102 and -103

/// INITIALISE and the devices that react to it
pub fn initialise(data: u8) -> String {
    match data {
        0xff => "INITIALISE (UNADDRESSED)".to_string(),
        0x00 => "INITIALISE (ALL)".to_string(),
        d if d <= 0x7f && d & 0x01 == 1 => format!("INITIALISE (G{:02})", d >> 1),
        d => format!("INITIALISE (NONE) - 0x{:02X}", d),
    }
}

/// Searchaddress byte, `plane` is one of 'H', 'M' or 'L'
pub fn search_address(plane: char, data: u8) -> String {
    format!("SEARCHADDR{} (0x{:02X}) = {}", plane, data, data)
}

pub fn write_memory_location(data: u8, reply: bool) -> String {
    if reply {
        format!("WRITE MEMORY LOCATION DTR1, DTR0, (0x{:02X}) = {}", data, data)
    } else {
        format!(
            "WRITE MEMORY LOCATION - NO REPLY - DTR1, DTR0, (0x{:02X}) = {}",
            data, data
        )
    }
}

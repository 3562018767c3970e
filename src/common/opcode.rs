use std::fmt;

/// Sixteen consecutive opcodes where the offset from `base` is a parameter,
/// e.g. the scene number of GO TO SCENE.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CountedFamily {
    pub base: u8,
    pub name: &'static str,
}

impl CountedFamily {
    pub const SPAN: u8 = 16;

    pub const fn new(base: u8, name: &'static str) -> CountedFamily {
        CountedFamily { base, name }
    }

    pub fn contains(&self, opcode: u8) -> bool {
        opcode >= self.base && opcode - self.base < Self::SPAN
    }
}

/// Name of a command found in an opcode table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandName {
    Named(&'static str),
    Counted(&'static str, u8),
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandName::Named(name) => f.write_str(name),
            CommandName::Counted(name, count) => write!(f, "{} {}", name, count),
        }
    }
}

/// Placeholder for an opcode missing from a table
pub fn undefined(code: u8, what: &str) -> String {
    format!("--- CODE 0x{:02X} = {} {}", code, code, what)
}

/// Byte as hex, decimal and binary, used for register writes
pub fn data_byte(data: u8) -> String {
    format!("0x{:02X} = {:3} = {:08b}", data, data, data)
}

#[cfg(test)]
mod test {
    use super::{data_byte, undefined, CommandName, CountedFamily};

    #[test]
    fn counted_family_test() {
        let f = CountedFamily::new(0x10, "GO TO SCENE");
        assert!(!f.contains(0x0f));
        assert!(f.contains(0x10));
        assert!(f.contains(0x1f));
        assert!(!f.contains(0x20));
        let top = CountedFamily::new(0xf0, "TOP");
        assert!(top.contains(0xff));
    }

    #[test]
    fn format_test() {
        assert_eq!(CommandName::Counted("ADD TO GROUP", 3).to_string(), "ADD TO GROUP 3");
        assert_eq!(CommandName::Named("OFF").to_string(), "OFF");
        assert_eq!(undefined(0x0d, "UNDEFINED"), "--- CODE 0x0D = 13 UNDEFINED");
        assert_eq!(data_byte(5), "0x05 =   5 = 00000101");
    }
}

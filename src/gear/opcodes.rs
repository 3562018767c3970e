//! Control gear commands, IEC 62386-102 table 15.

use crate::common::opcode::{CommandName, CountedFamily};
use core::ops::RangeInclusive;
use lazy_static::lazy_static;

pub const COUNTED_FAMILIES: [CountedFamily; 6] = [
    CountedFamily::new(0x10, "GO TO SCENE"),
    CountedFamily::new(0x40, "SET SCENE (DTR0)"),
    CountedFamily::new(0x50, "REMOVE FROM SCENE"),
    CountedFamily::new(0x60, "ADD TO GROUP"),
    CountedFamily::new(0x70, "REMOVE FROM GROUP"),
    CountedFamily::new(0xb0, "QUERY SCENE LEVEL"),
];

/// Opcodes whose meaning depends on the enabled device type
pub const APPLICATION_EXTENDED: RangeInclusive<u8> = 0xe0..=0xfe;

const COMMANDS: &[(u8, &str)] = &[
    (0x00, "OFF"),
    (0x01, "UP"),
    (0x02, "DOWN"),
    (0x03, "STEP UP"),
    (0x04, "STEP DOWN"),
    (0x05, "RECALL MAX LEVEL"),
    (0x06, "RECALL MIN LEVEL"),
    (0x07, "STEP DOWN AND OFF"),
    (0x08, "ON AND STEP UP"),
    (0x09, "ENABLE DAPC SEQUENCE"),
    (0x0a, "GO TO LAST ACTIVE LEVEL"),
    (0x0b, "CONTINOUS UP"),
    (0x0c, "CONTINOUS DOWN"),
    (0x20, "RESET"),
    (0x21, "STORE ACTUAL LEVEL IN DTR0"),
    (0x22, "SAVE PERSISTENT VARIABLES (DEPRECATED)"),
    (0x23, "SET OPERATING MODE (DTR0)"),
    (0x24, "RESET MEMORY BANK (DTR0)"),
    (0x25, "IDENTIFY DEVICE"),
    (0x2a, "SET MAX LEVEL (DTR0)"),
    (0x2b, "SET MIN LEVEL (DTR0)"),
    (0x2c, "SET SYSTEM FAILURE LEVEL (DTR0)"),
    (0x2d, "SET POWER ON LEVEL (DTR0)"),
    (0x2e, "SET FADE TIME (DTR0)"),
    (0x2f, "SET FADE RATE (DTR0)"),
    (0x30, "SET EXTENDED FADE TIME (DTR0)"),
    (0x80, "SET SHORT ADDRESS (DTR0)"),
    (0x81, "ENABLE WRITE MEMORY"),
    (0x90, "QUERY STATUS"),
    (0x91, "QUERY CONTROL GEAR PRESENT"),
    (0x92, "QUERY LAMP FAILURE"),
    (0x93, "QUERY LAMP POWER ON"),
    (0x94, "QUERY LIMIT ERROR"),
    (0x95, "QUERY RESET STATE"),
    (0x96, "QUERY MISSING SHORT ADDRESS"),
    (0x97, "QUERY VERSION NUMBER"),
    (0x98, "QUERY CONTENT DTR0"),
    (0x99, "QUERY DEVICE TYPE"),
    (0x9a, "QUERY PHYSICAL MINIMUM"),
    (0x9b, "QUERY POWER FAILURE"),
    (0x9c, "QUERY CONTENT DTR1"),
    (0x9d, "QUERY CONTENT DTR2"),
    (0x9e, "QUERY OPERATING MODE"),
    (0x9f, "QUERY LIGHT SOURCE TYPE"),
    (0xa0, "QUERY ACTUAL LEVEL"),
    (0xa1, "QUERY MAX LEVEL"),
    (0xa2, "QUERY MIN LEVEL"),
    (0xa3, "QUERY POWER ON LEVEL"),
    (0xa4, "QUERY SYSTEM FAILURE LEVEL"),
    (0xa5, "QUERY FADE TIME/FADE RATE"),
    (0xa6, "QUERY MANUFACTURER SPECIFIC MODE"),
    (0xa7, "QUERY NEXT DEVICE TYPE"),
    (0xa8, "QUERY EXTENDED FADE TIME"),
    (0xaa, "QUERY CONTROL GEAR FAILURE"),
    (0xc0, "QUERY GROUPS 0-7"),
    (0xc1, "QUERY GROUPS 8-15"),
    (0xc2, "QUERY RANDOM ADDRESS (H)"),
    (0xc3, "QUERY RANDOM ADDRESS (M)"),
    (0xc4, "QUERY RANDOM ADDRESS (L)"),
    (0xc5, "READ MEMORY LOCATION (DTR1,DTR0)"),
    (0xff, "QUERY EXTENDED VERSION NUMBER"),
];

lazy_static! {
    static ref GEAR_COMMANDS: [Option<CommandName>; 256] = {
        let mut table = [None; 256];
        for family in &COUNTED_FAMILIES {
            for offset in 0..CountedFamily::SPAN {
                table[usize::from(family.base + offset)] =
                    Some(CommandName::Counted(family.name, offset));
            }
        }
        for &(opcode, name) in COMMANDS {
            table[usize::from(opcode)] = Some(CommandName::Named(name));
        }
        table
    };
}

/// Look up a command that means the same for all device types
pub fn lookup(opcode: u8) -> Option<CommandName> {
    GEAR_COMMANDS[usize::from(opcode)]
}

#[cfg(test)]
mod test {
    use super::{lookup, APPLICATION_EXTENDED, COUNTED_FAMILIES};
    use crate::common::opcode::CommandName;

    #[test]
    fn named_test() {
        assert_eq!(lookup(0x00), Some(CommandName::Named("OFF")));
        assert_eq!(lookup(0x30), Some(CommandName::Named("SET EXTENDED FADE TIME (DTR0)")));
        assert_eq!(lookup(0xff), Some(CommandName::Named("QUERY EXTENDED VERSION NUMBER")));
    }

    #[test]
    fn counted_test() {
        assert_eq!(lookup(0x1f), Some(CommandName::Counted("GO TO SCENE", 15)));
        assert_eq!(lookup(0x63), Some(CommandName::Counted("ADD TO GROUP", 3)));
        assert_eq!(lookup(0xb0), Some(CommandName::Counted("QUERY SCENE LEVEL", 0)));
    }

    #[test]
    fn families_do_not_overlap_test() {
        for (i, a) in COUNTED_FAMILIES.iter().enumerate() {
            for b in &COUNTED_FAMILIES[i + 1..] {
                assert!(!a.contains(b.base) && !b.contains(a.base));
            }
        }
    }

    #[test]
    fn gaps_test() {
        for opcode in [0x0d, 0x26, 0x31, 0x3f, 0x82, 0x8f, 0xa9, 0xab, 0xc6, 0xdf] {
            assert_eq!(lookup(opcode), None, "0x{:02x}", opcode);
        }
        for opcode in APPLICATION_EXTENDED {
            assert_eq!(lookup(opcode), None);
        }
    }
}

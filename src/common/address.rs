//! Resolution of the address byte of a forward frame.

use core::ops::RangeInclusive;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Short(u8);

impl Short {
    pub const RANGE: RangeInclusive<u8> = 0..=63;

    pub fn new(a: u8) -> Short {
        assert!(Self::RANGE.contains(&a));
        Short(a)
    }

    /// Address 0..64
    pub fn value(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(u8);

impl Group {
    pub const RANGE: RangeInclusive<u8> = 0..=15;

    pub fn new(g: u8) -> Group {
        assert!(Self::RANGE.contains(&g));
        Group(g)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// What the address byte of a frame selects
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Addressing {
    Short(Short),
    Group(Group),
    BroadcastUnaddressed,
    Broadcast,
    /// Unaddressed special command, the address byte is the command
    Special,
    /// Address space left unassigned by the standard
    Reserved,
    /// Event or power cycle notification from an input device
    Event,
}

/// How addresses are written in the monitor output
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelStyle {
    /// Control gear, 16 bit frames
    Gear,
    /// Control devices, 24 bit frames
    Control,
}

impl Addressing {
    /// Address byte of a 16 bit forward frame (IEC 62386-102 7.2.1).
    ///
    /// Bit 0 is the selector bit and does not take part in the resolution.
    pub fn from_gear_byte(addr: u8) -> Addressing {
        match addr {
            0x00..=0x7f => Addressing::Short(Short::new(addr >> 1)),
            0x80..=0x9f => Addressing::Group(Group::new((addr >> 1) & 0x0f)),
            0xa0..=0xcb => Addressing::Special,
            0xcc..=0xfb => Addressing::Reserved,
            0xfc..=0xfd => Addressing::BroadcastUnaddressed,
            0xfe..=0xff => Addressing::Broadcast,
        }
    }

    /// Address byte of a 24 bit forward frame (IEC 62386-103 7.2.2.1)
    pub fn from_control_byte(addr: u8) -> Addressing {
        match addr {
            a if a & 0x01 == 0 => Addressing::Event,
            0x00..=0x7f => Addressing::Short(Short::new(addr >> 1)),
            0x80..=0xbf => Addressing::Group(Group::new((addr >> 1) & 0x0f)),
            0xc1..=0xdf => Addressing::Special,
            0xfd => Addressing::BroadcastUnaddressed,
            0xff => Addressing::Broadcast,
            // 0xe1..=0xef, 0xf1..=0xf7 and 0xf8..=0xfb
            _ => Addressing::Reserved,
        }
    }

    /// True if the frame is sent to one or more devices
    pub fn is_addressed(&self) -> bool {
        matches!(
            self,
            Addressing::Short(_)
                | Addressing::Group(_)
                | Addressing::BroadcastUnaddressed
                | Addressing::Broadcast
        )
    }

    /// Unpadded label, empty when nothing is addressed
    pub fn label(&self, style: LabelStyle) -> String {
        match (style, self) {
            (LabelStyle::Gear, Addressing::Short(a)) => format!("G{:02}", a.value()),
            (LabelStyle::Gear, Addressing::Group(g)) => format!("GG{:02}", g.value()),
            (LabelStyle::Gear, Addressing::BroadcastUnaddressed) => "BC GEAR UN".to_string(),
            (LabelStyle::Gear, Addressing::Broadcast) => "BC GEAR".to_string(),
            (LabelStyle::Control, Addressing::Short(a)) => format!("A{:02}", a.value()),
            (LabelStyle::Control, Addressing::Group(g)) => format!("G{:02}", g.value()),
            (LabelStyle::Control, Addressing::BroadcastUnaddressed) => "BC unadr.".to_string(),
            (LabelStyle::Control, Addressing::Broadcast) => "BC".to_string(),
            _ => String::new(),
        }
    }
}

/// Right-pad a label so the command column lines up
pub fn pad_label(label: &str, width: usize) -> String {
    format!("{:<width$}", label, width = width)
}

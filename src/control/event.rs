//! Event frames from input devices, IEC 62386-103 9.6.

use serde_derive::Serialize;

/// Who sent an event, from bits 23, 22 and 15 of the frame
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum EventCategory {
    Reserved,
    Device,
    DeviceInstance,
    DeviceGroup,
    Instance,
    InstanceGroup,
}

const BIT_23: u32 = 1 << 23;
const BIT_22: u32 = 1 << 22;
const BIT_15: u32 = 1 << 15;

/// Top bits of a power cycle notification
const POWER_CYCLE_PATTERN: u32 = 0x7f7;
const POWER_CYCLE_SHIFT: u32 = 13;

pub fn is_power_cycle(frame: u32) -> bool {
    frame >> POWER_CYCLE_SHIFT == POWER_CYCLE_PATTERN
}

pub fn classify(frame: u32) -> EventCategory {
    match (frame & BIT_23 != 0, frame & BIT_22 != 0, frame & BIT_15 != 0) {
        (true, true, true) => EventCategory::Reserved,
        (true, true, false) => EventCategory::InstanceGroup,
        (true, false, true) => EventCategory::Instance,
        (true, false, false) => EventCategory::DeviceGroup,
        (false, _, true) => EventCategory::DeviceInstance,
        (false, _, false) => EventCategory::Device,
    }
}

/// Source label, empty for reserved events
pub fn source_label(category: EventCategory, frame: u32) -> String {
    let short_address = (frame >> 17) & 0x3f;
    let first = (frame >> 17) & 0x1f;
    let second = (frame >> 10) & 0x1f;
    match category {
        EventCategory::Device => format!("A{:02X},T{:02X}", short_address, second),
        EventCategory::DeviceInstance => format!("A{:02X},I{:02X}", short_address, second),
        EventCategory::DeviceGroup => format!("G{:02X},T{:02X}", first, second),
        EventCategory::Instance => format!("T{:02X},I{:02X}", first, second),
        EventCategory::InstanceGroup => format!("IG{:02X},T{:02X}", first, second),
        EventCategory::Reserved => String::new(),
    }
}

/// Event payload as hex, decimal and binary
pub fn event_data(frame: u32) -> String {
    let data = frame & 0x3ff;
    format!("EVENT DATA 0x{:03X} = {} = {:012b}b", data, data, data)
}

/// Label of a power cycle notification: the group and short address of
/// the sender, each only when present
pub fn power_cycle_label(frame: u32) -> String {
    let mut parts = Vec::new();
    if frame & (1 << 12) != 0 {
        parts.push(format!("G{:02X}", (frame >> 7) & 0x1f));
    }
    if frame & (1 << 6) != 0 {
        parts.push(format!("A{:02X}", frame & 0x3f));
    }
    parts.join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    fn frame(bit23: bool, bit22: bool, bit15: bool, first: u32, second: u32, data: u32) -> u32 {
        (u32::from(bit23) << 23)
            | (u32::from(bit22) << 22)
            | (first << 17)
            | (u32::from(bit15) << 15)
            | (second << 10)
            | data
    }

    #[test]
    fn classify_test() {
        let cases = [
            (true, true, true, EventCategory::Reserved),
            (true, true, false, EventCategory::InstanceGroup),
            (true, false, true, EventCategory::Instance),
            (true, false, false, EventCategory::DeviceGroup),
            (false, true, true, EventCategory::DeviceInstance),
            (false, false, true, EventCategory::DeviceInstance),
            (false, true, false, EventCategory::Device),
            (false, false, false, EventCategory::Device),
        ];
        for (b23, b22, b15, category) in cases {
            for data in [0, 0x155, 0x3ff] {
                assert_eq!(classify(frame(b23, b22, b15, 3, 7, data)), category);
            }
        }
    }

    #[test]
    fn label_test() {
        let f = frame(false, false, false, 0x05, 0x02, 0);
        assert_eq!(source_label(EventCategory::Device, f), "A05,T02");
        // Short addresses use bit 22 too
        let f = frame(false, true, true, 0x05, 0x11, 0);
        assert_eq!(source_label(EventCategory::DeviceInstance, f), "A25,I11");
        let f = frame(true, false, false, 0x1f, 0x04, 0);
        assert_eq!(source_label(EventCategory::DeviceGroup, f), "G1F,T04");
        let f = frame(true, false, true, 0x01, 0x02, 0);
        assert_eq!(source_label(EventCategory::Instance, f), "T01,I02");
        let f = frame(true, true, false, 0x0a, 0x03, 0);
        assert_eq!(source_label(EventCategory::InstanceGroup, f), "IG0A,T03");
        assert_eq!(source_label(EventCategory::Reserved, 0xffffff), "");
    }

    #[test]
    fn event_data_test() {
        assert_eq!(event_data(0x3ff), "EVENT DATA 0x3FF = 1023 = 001111111111b");
        assert_eq!(event_data(0x8405), "EVENT DATA 0x005 = 5 = 000000000101b");
    }

    #[test]
    fn power_cycle_test() {
        assert!(is_power_cycle(0xfee000));
        assert!(is_power_cycle(0xfeffff));
        assert!(!is_power_cycle(0xfec000));
        assert_eq!(power_cycle_label(0xfee000), "");
        assert_eq!(power_cycle_label(0xfee000 | (1 << 6) | 0x2a), "A2A");
        assert_eq!(power_cycle_label(0xfee000 | (1 << 12) | (0x03 << 7)), "G03");
        assert_eq!(
            power_cycle_label(0xfee000 | (1 << 12) | (0x1f << 7) | (1 << 6) | 0x3f),
            "G1F A3F"
        );
    }
}

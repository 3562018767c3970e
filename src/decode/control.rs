//! 24 bit frames: commands to control devices and events from input
//! devices (IEC 62386-103)

use super::DecodedCommand;
use crate::base::device_type::DeviceTypeContext;
use crate::common::address::{pad_label, Addressing, LabelStyle};
use crate::common::opcode::undefined;
use crate::control::{event, opcodes, special};

fn device_command(opcode: u8) -> String {
    match opcodes::lookup(opcode) {
        Some(name) => name.to_string(),
        None => undefined(opcode, "UNDEFINED CONTROL DEVICE COMMAND"),
    }
}

fn decode_event(frame: u32) -> (String, String) {
    if event::is_power_cycle(frame) {
        return (event::power_cycle_label(frame), "POWER CYCLE EVENT".to_string());
    }
    match event::classify(frame) {
        event::EventCategory::Reserved => (String::new(), "RESERVED EVENT".to_string()),
        category => (event::source_label(category, frame), event::event_data(frame)),
    }
}

/// Decode a 24 bit frame. The context is passed on unchanged, none of
/// these frames enable a device type.
pub fn decode(frame: u32, context: DeviceTypeContext, width: usize) -> DecodedCommand {
    let [_, address, instance, opcode] = frame.to_be_bytes();
    let addressing = Addressing::from_control_byte(address);
    let (label, text) = match addressing {
        Addressing::Event => decode_event(frame),
        Addressing::Special => (String::new(), special::decode(address, instance, opcode)),
        Addressing::Reserved => (String::new(), "RESERVED".to_string()),
        a => (a.label(LabelStyle::Control), device_command(opcode)),
    };
    DecodedCommand::new(pad_label(&label, width), text, context)
}

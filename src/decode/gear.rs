//! 16 bit forward frames to control gear (IEC 62386-102)

use super::DecodedCommand;
use crate::base::device_type::DeviceTypeContext;
use crate::common::address::{pad_label, Addressing, LabelStyle};
use crate::common::opcode::undefined;
use crate::gear::{extended, opcodes, special};

fn command(opcode: u8, context: DeviceTypeContext) -> String {
    if opcodes::APPLICATION_EXTENDED.contains(&opcode) {
        return match context.device_type() {
            Some(t) => match extended::lookup(t, opcode) {
                Some(name) => name.to_string(),
                None => undefined(opcode, &format!("UNDEFINED DT{} COMMAND", t.value())),
            },
            None => undefined(opcode, "APPLICATION EXTENDED COMMAND"),
        };
    }
    match opcodes::lookup(opcode) {
        Some(name) => name.to_string(),
        None => undefined(opcode, "UNDEFINED"),
    }
}

pub fn decode(frame: u16, context: DeviceTypeContext, width: usize) -> DecodedCommand {
    let [address, opcode] = frame.to_be_bytes();
    let addressing = Addressing::from_gear_byte(address);
    let label = pad_label(&addressing.label(LabelStyle::Gear), width);
    match addressing {
        Addressing::Special => {
            let (text, next) = special::decode(address, opcode);
            DecodedCommand::new(label, text, next)
        }
        a if a.is_addressed() => {
            let text = if address & 0x01 == 0 {
                format!("DAPC {}", opcode)
            } else {
                command(opcode, context)
            };
            DecodedCommand::new(label, text, DeviceTypeContext::None)
        }
        _ => DecodedCommand::new(label, "RESERVED".to_string(), DeviceTypeContext::None),
    }
}

#[cfg(test)]
mod test {
    use super::decode;
    use crate::base::device_type::{types, DeviceType, DeviceTypeContext};

    const WIDTH: usize = 14;

    fn text(frame: u16, context: DeviceTypeContext) -> String {
        decode(frame, context, WIDTH).command_text
    }

    #[test]
    fn dapc_test() {
        assert_eq!(decode(0xfe80, DeviceTypeContext::None, WIDTH).to_string(), "BC GEAR       DAPC 128");
        assert_eq!(decode(0x0a00, DeviceTypeContext::None, WIDTH).to_string(), "G05           DAPC 0");
        assert_eq!(decode(0x9eff, DeviceTypeContext::None, WIDTH).to_string(), "GG15          DAPC 255");
        assert_eq!(decode(0xfc10, DeviceTypeContext::None, WIDTH).to_string(), "BC GEAR UN    DAPC 16");
    }

    #[test]
    fn extended_test() {
        let colour = DeviceTypeContext::Enabled(DeviceType::new(types::COLOUR));
        assert_eq!(text(0xffe2, colour), "ACTIVATE");
        assert_eq!(
            text(0xffe2, DeviceTypeContext::None),
            "--- CODE 0xE2 = 226 APPLICATION EXTENDED COMMAND"
        );
        let switching = DeviceTypeContext::Enabled(DeviceType::new(types::SWITCHING));
        assert_eq!(text(0xffe2, switching), "--- CODE 0xE2 = 226 UNDEFINED DT7 COMMAND");
        // Not an extended command, the context doesn't matter
        assert_eq!(text(0xffff, colour), "QUERY EXTENDED VERSION NUMBER");
        assert_eq!(text(0xff00, colour), "OFF");
    }

    #[test]
    fn context_test() {
        let colour = DeviceTypeContext::Enabled(DeviceType::new(types::COLOUR));
        assert_eq!(decode(0xc108, DeviceTypeContext::None, WIDTH).next_context, colour);
        assert_eq!(decode(0xffe2, colour, WIDTH).next_context, DeviceTypeContext::None);
        assert_eq!(decode(0xa300, colour, WIDTH).next_context, DeviceTypeContext::None);
        assert_eq!(decode(0xd000, colour, WIDTH).next_context, DeviceTypeContext::None);
    }

    #[test]
    fn undefined_test() {
        assert_eq!(text(0x010d, DeviceTypeContext::None), "--- CODE 0x0D = 13 UNDEFINED");
    }
}

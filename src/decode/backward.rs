use super::DecodedCommand;
use crate::base::device_type::DeviceTypeContext;
use crate::common::address::pad_label;

/// Backward frame, the answer to a query. Carries no address and leaves
/// the context to the next forward frame.
pub fn decode(data: u8, context: DeviceTypeContext, width: usize) -> DecodedCommand {
    DecodedCommand::new(pad_label("", width), format!("DATA 0x{:02X}", data), context)
}

#[cfg(test)]
mod test {
    use super::decode;
    use crate::base::device_type::{DeviceType, DeviceTypeContext};

    #[test]
    fn backward_test() {
        for data in 0..=0xffu8 {
            let cmd = decode(data, DeviceTypeContext::None, 14);
            assert_eq!(cmd.to_string(), format!("{}DATA 0x{:02X}", " ".repeat(14), data));
        }
    }

    #[test]
    fn keeps_context_test() {
        let ctx = DeviceTypeContext::Enabled(DeviceType::new(6));
        assert_eq!(decode(0xff, ctx, 14).next_context, ctx);
    }
}

use serde_derive::Serialize;
use std::fmt;

pub mod types {
    pub const FLORESCENT: u8 = 0;
    pub const EMERGENCY: u8 = 1;
    pub const DISCHARGE: u8 = 2;
    pub const LV_HALOGEN: u8 = 3;
    pub const INCANDESCENT: u8 = 4;
    pub const DC_CONTROL: u8 = 5;
    pub const LED: u8 = 6;
    pub const SWITCHING: u8 = 7;
    pub const COLOUR: u8 = 8;
    pub const UNIMPLEMENTED: u8 = 254;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceType(u8);

impl DeviceType {
    pub const fn new(dtype: u8) -> DeviceType {
        DeviceType(dtype)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_str = match self.0 {
            types::FLORESCENT => "Florescent",
            types::EMERGENCY => "Self-contained emergency",
            types::DISCHARGE => "Discharge (HID)",
            types::LV_HALOGEN => "Low-voltage halogen",
            types::INCANDESCENT => "Incandescent",
            types::DC_CONTROL => "Conversion to D.C. voltage",
            types::LED => "LED",
            types::SWITCHING => "Switching",
            types::COLOUR => "Colour",
            types::UNIMPLEMENTED => "Not implemented",
            _ => "",
        };
        if type_str.is_empty() {
            write!(f, "Unknown type {}", self.0)
        } else {
            f.write_str(type_str)
        }
    }
}

/// Device type that the next frame is interpreted with.
///
/// Set by ENABLE DEVICE TYPE and consumed by the following forward frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub enum DeviceTypeContext {
    #[default]
    None,
    Enabled(DeviceType),
}

impl DeviceTypeContext {
    pub fn device_type(&self) -> Option<DeviceType> {
        match self {
            DeviceTypeContext::None => None,
            DeviceTypeContext::Enabled(t) => Some(*t),
        }
    }
}

impl From<DeviceType> for DeviceTypeContext {
    fn from(t: DeviceType) -> Self {
        DeviceTypeContext::Enabled(t)
    }
}

impl fmt::Display for DeviceTypeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceTypeContext::None => f.write_str("None"),
            DeviceTypeContext::Enabled(t) => write!(f, "DT{} ({})", t.value(), t),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{types, DeviceType, DeviceTypeContext};

    #[test]
    fn display_test() {
        assert_eq!(DeviceType::new(types::LED).to_string(), "LED");
        assert_eq!(DeviceType::new(42).to_string(), "Unknown type 42");
        assert_eq!(
            DeviceTypeContext::from(DeviceType::new(types::COLOUR)).to_string(),
            "DT8 (Colour)"
        );
    }

    #[test]
    fn default_test() {
        let ctx = DeviceTypeContext::default();
        assert_eq!(ctx, DeviceTypeContext::None);
        assert_eq!(ctx.device_type(), None);
    }
}

//! Application extended commands, selected by ENABLE DEVICE TYPE.

use crate::base::device_type::{types, DeviceType};

// IEC 62386-202
fn emergency_cmd(opcode: u8) -> Option<&'static str> {
    Some(match opcode {
        0xe0 => "REST",
        0xe1 => "INHIBIT",
        0xe2 => "RE-LIGHT/RESET INHIBIT",
        0xe3 => "START FUNCTION TEST",
        0xe4 => "START DURATION TEST",
        0xe5 => "STOP TEST",
        0xe6 => "RESET FUNCTION TEST DONE FLAG",
        0xe7 => "RESET DURATION TEST DONE FLAG",
        0xe8 => "RESET LAMP TIME",
        0xe9 => "STORE DTR AS EMERGENCY LEVEL",
        0xea => "STORE TEST DELAY TIME HIGH BYTE",
        0xeb => "STORE TEST DELAY TIME LOW BYTE",
        0xec => "STORE FUNCTION TEST INTERVAL",
        0xed => "STORE DURATION TEST INTERVAL",
        0xee => "STORE TEST EXECUTION TIMEOUT",
        0xef => "STORE PROLONG TIME",
        0xf0 => "START IDENTIFICATION",
        0xf1 => "QUERY BATTERY CHARGE",
        0xf2 => "QUERY TEST TIMING",
        0xf3 => "QUERY DURATION TEST RESULT",
        0xf4 => "QUERY LAMP EMERGENCY TIME",
        0xf5 => "QUERY LAMP TOTAL OPERATION TIME",
        0xf6 => "QUERY EMERGENCY LEVEL",
        0xf7 => "QUERY EMERGENCY MIN LEVEL",
        0xf8 => "QUERY EMERGENCY MAX LEVEL",
        0xf9 => "QUERY RATED DURATION",
        0xfa => "QUERY EMERGENCY MODE",
        0xfb => "QUERY FEATURES",
        0xfc => "QUERY FAILURE STATUS",
        0xfd => "QUERY EMERGENCY STATUS",
        0xfe => "PERFORM DTR SELECTED FUNCTION",
        _ => return None,
    })
}

// IEC 62386-207
fn led_cmd(opcode: u8) -> Option<&'static str> {
    Some(match opcode {
        0xe0 => "REFERENCE SYSTEM POWER",
        0xe1 => "ENABLE CURRENT PROTECTOR",
        0xe2 => "DISABLE CURRENT PROTECTOR",
        0xe3 => "SELECT DIMMING CURVE (DTR0)",
        0xe4 => "SET FAST FADE TIME (DTR0)",
        0xed => "QUERY GEAR TYPE",
        0xee => "QUERY DIMMING CURVE",
        0xef => "QUERY POSSIBLE OPERATING MODES",
        0xf0 => "QUERY FEATURES",
        0xf1 => "QUERY FAILURE STATUS",
        0xf2 => "QUERY SHORT CIRCUIT",
        0xf3 => "QUERY OPEN CIRCUIT",
        0xf4 => "QUERY LOAD DECREASE",
        0xf5 => "QUERY LOAD INCREASE",
        0xf6 => "QUERY CURRENT PROTECTOR ACTIVE",
        0xf7 => "QUERY THERMAL SHUT DOWN",
        0xf8 => "QUERY THERMAL OVERLOAD",
        0xf9 => "QUERY REFERENCE RUNNING",
        0xfa => "QUERY REFERENCE MEASUREMENT FAILED",
        0xfb => "QUERY CURRENT PROTECTOR ENABLED",
        0xfc => "QUERY OPERATING MODE",
        0xfd => "QUERY FAST FADE TIME",
        0xfe => "QUERY MIN FAST FADE TIME",
        _ => return None,
    })
}

// IEC 62386-209
fn colour_cmd(opcode: u8) -> Option<&'static str> {
    Some(match opcode {
        0xe0 => "SET TEMPORARY X-COORDINATE (DTR1,DTR0)",
        0xe1 => "SET TEMPORARY Y-COORDINATE (DTR1,DTR0)",
        0xe2 => "ACTIVATE",
        0xe3 => "X-COORDINATE STEP UP",
        0xe4 => "X-COORDINATE STEP DOWN",
        0xe5 => "Y-COORDINATE STEP UP",
        0xe6 => "Y-COORDINATE STEP DOWN",
        0xe7 => "SET TEMPORARY COLOUR TEMPERATURE TC (DTR1,DTR0)",
        0xe8 => "COLOUR TEMPERATURE TC STEP COOLER",
        0xe9 => "COLOUR TEMPERATURE TC STEP WARMER",
        0xea => "SET TEMPORARY PRIMARY N DIMLEVEL (DTR2,DTR1,DTR0)",
        0xeb => "SET TEMPORARY RGB DIMLEVEL (DTR2,DTR1,DTR0)",
        0xec => "SET TEMPORARY WAF DIMLEVEL (DTR2,DTR1,DTR0)",
        0xed => "SET TEMPORARY RGBWAF CONTROL (DTR0)",
        0xee => "COPY REPORT TO TEMPORARY",
        0xf0 => "STORE TY PRIMARY N (DTR2)",
        0xf1 => "STORE XY-COORDINATE PRIMARY N (DTR2)",
        0xf2 => "STORE COLOUR TEMPERATURE TC LIMIT (DTR2)",
        0xf3 => "STORE GEAR FEATURES/STATUS (DTR0)",
        0xf5 => "ASSIGN COLOUR TO LINKED CHANNEL (DTR0)",
        0xf6 => "START AUTO CALIBRATION",
        0xf7 => "QUERY GEAR FEATURES/STATUS",
        0xf8 => "QUERY COLOUR STATUS",
        0xf9 => "QUERY COLOUR TYPE FEATURES",
        0xfa => "QUERY COLOUR VALUE (DTR0)",
        0xfb => "QUERY RGBWAF CONTROL",
        0xfc => "QUERY ASSIGNED COLOUR",
        _ => return None,
    })
}

/// Name of an application extended command for `device_type`.
///
/// `None` if the device type has no table or the opcode is not in it.
pub fn lookup(device_type: DeviceType, opcode: u8) -> Option<&'static str> {
    match device_type.value() {
        types::EMERGENCY => emergency_cmd(opcode),
        types::LED => led_cmd(opcode),
        types::COLOUR => colour_cmd(opcode),
        _ => None,
    }
}

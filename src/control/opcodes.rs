//! Control device commands, IEC 62386-103 11.2.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref DEVICE_COMMANDS: HashMap<u8, &'static str> = {
        let mut m = HashMap::new();
        // Device commands
        m.insert(0x00, "IDENTIFY DEVICE");
        m.insert(0x01, "RESET POWER CYCLE SEEN");
        m.insert(0x10, "RESET");
        m.insert(0x11, "RESET MEMORY BANK (DTR0)");
        m.insert(0x14, "SET SHORT ADDRESS (DTR0)");
        m.insert(0x15, "ENABLE WRITE MEMORY");
        m.insert(0x16, "ENABLE APPLICATION CONTROLLER");
        m.insert(0x17, "DISABLE APPLICATION CONTROLLER");
        m.insert(0x18, "SET OPERATING MODE (DTR0)");
        m.insert(0x19, "ADD TO DEVICE GROUPS 0-15 (DTR2:DTR1)");
        m.insert(0x1a, "ADD TO DEVICE GROUPS 16-31 (DTR2:DTR1)");
        m.insert(0x1b, "REMOVE FROM DEVICE GROUPS 0-15 (DTR2:DTR1)");
        m.insert(0x1c, "REMOVE FROM DEVICE GROUPS 16-31 (DTR2:DTR1)");
        m.insert(0x1d, "START QUIESCENT MODE");
        m.insert(0x1e, "STOP QUIESCENT MODE");
        m.insert(0x1f, "ENABLE POWER CYCLE NOTIFICATION");
        m.insert(0x20, "DISABLE POWER CYCLE NOTIFICATION");
        m.insert(0x21, "SAVE PERSISTENT VARIABLES (DEPRECATED)");
        m.insert(0x30, "QUERY DEVICE STATUS");
        m.insert(0x31, "QUERY APPLICATION CONTROLLER ERROR");
        m.insert(0x32, "QUERY INPUT DEVICE ERROR");
        m.insert(0x33, "QUERY MISSING SHORT ADDRESS");
        m.insert(0x34, "QUERY VERSION NUMBER");
        m.insert(0x35, "QUERY NUMBER OF INSTANCES");
        m.insert(0x36, "QUERY CONTENT DTR0");
        m.insert(0x37, "QUERY CONTENT DTR1");
        m.insert(0x38, "QUERY CONTENT DTR2");
        m.insert(0x39, "QUERY RANDOM ADDRESS (H)");
        m.insert(0x3a, "QUERY RANDOM ADDRESS (M)");
        m.insert(0x3b, "QUERY RANDOM ADDRESS (L)");
        m.insert(0x3c, "READ MEMORY LOCATION (DTR1,DTR0)");
        m.insert(0x3d, "QUERY APPLICATION CONTROL ENABLED");
        m.insert(0x3e, "QUERY OPERATING MODE");
        m.insert(0x3f, "QUERY MANUFACTURER SPECIFIC MODE");
        m.insert(0x40, "QUERY QUIESCENT MODE");
        m.insert(0x41, "QUERY DEVICE GROUPS 0-7");
        m.insert(0x42, "QUERY DEVICE GROUPS 8-15");
        m.insert(0x43, "QUERY DEVICE GROUPS 16-23");
        m.insert(0x44, "QUERY DEVICE GROUPS 24-31");
        m.insert(0x45, "QUERY POWER CYCLE NOTIFICATION");
        m.insert(0x46, "QUERY DEVICE CAPABILITIES");
        m.insert(0x47, "QUERY EXTENDED VERSION NUMBER (DTR0)");
        m.insert(0x48, "QUERY RESET STATE");
        // Instance commands
        m.insert(0x61, "SET EVENT PRIORITY (DTR0)");
        m.insert(0x62, "ENABLE INSTANCE");
        m.insert(0x63, "DISABLE INSTANCE");
        m.insert(0x64, "SET PRIMARY INSTANCE GROUP (DTR0)");
        m.insert(0x65, "SET INSTANCE GROUP 1 (DTR0)");
        m.insert(0x66, "SET INSTANCE GROUP 2 (DTR0)");
        m.insert(0x67, "SET EVENT SCHEME (DTR0)");
        m.insert(0x68, "SET EVENT FILTER (DTR2,DTR1,DTR0)");
        m.insert(0x80, "QUERY INSTANCE TYPE");
        m.insert(0x81, "QUERY RESOLUTION");
        m.insert(0x82, "QUERY INSTANCE ERROR");
        m.insert(0x83, "QUERY INSTANCE STATUS");
        m.insert(0x84, "QUERY EVENT PRIORITY");
        m.insert(0x86, "QUERY INSTANCE ENABLED");
        m.insert(0x88, "QUERY PRIMARY INSTANCE GROUP");
        m.insert(0x89, "QUERY INSTANCE GROUP 1");
        m.insert(0x8a, "QUERY INSTANCE GROUP 2");
        m.insert(0x8b, "QUERY EVENT SCHEME");
        m.insert(0x8c, "QUERY INPUT VALUE");
        m.insert(0x8d, "QUERY INPUT VALUE LATCH");
        m.insert(0x8e, "QUERY FEATURE TYPE");
        m.insert(0x8f, "QUERY NEXT FEATURE TYPE");
        m.insert(0x90, "QUERY EVENT FILTER 0-7");
        m.insert(0x91, "QUERY EVENT FILTER 8-15");
        m.insert(0x92, "QUERY EVENT FILTER 16-23");
        m.insert(0x93, "QUERY INSTANCE CONFIGURATION (DTR0)");
        m.insert(0x94, "QUERY AVAILABLE INSTANCE TYPES");
        m
    };
}

pub fn lookup(opcode: u8) -> Option<&'static str> {
    DEVICE_COMMANDS.get(&opcode).copied()
}

#[cfg(test)]
mod test {
    use super::lookup;

    #[test]
    fn lookup_test() {
        assert_eq!(lookup(0x00), Some("IDENTIFY DEVICE"));
        assert_eq!(lookup(0x94), Some("QUERY AVAILABLE INSTANCE TYPES"));
        assert_eq!(lookup(0x02), None);
        assert_eq!(lookup(0x85), None);
        assert!((0x95..=0xff).all(|op| lookup(op).is_none()));
    }
}

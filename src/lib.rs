pub mod error;

pub mod base {
    pub mod device_type;
}

pub mod common {
    pub mod address;
    pub mod opcode;
    pub mod special;
}

pub mod gear {
    pub mod extended;
    pub mod opcodes;
    pub mod special;
}

pub mod control {
    pub mod event;
    pub mod opcodes;
    pub mod special;
}

pub mod decode;

pub mod monitor {
    pub mod frame;
    pub mod log_line;
    pub mod printer;
    pub mod session;
    pub mod source;
}

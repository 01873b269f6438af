//! Raw opcode bytes used by the envelope and Runestone grammars.

pub const OP_0: u8 = 0x00;
pub const OP_FALSE: u8 = OP_0;
pub const OP_PUSHBYTES_1: u8 = 0x01;
pub const OP_PUSHBYTES_3: u8 = 0x03;
pub const OP_PUSHBYTES_75: u8 = 0x4b;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_PUSHNUM_1: u8 = 0x51;
pub const OP_PUSHNUM_13: u8 = 0x5d;
pub const OP_PUSHNUM_16: u8 = 0x60;
pub const OP_IF: u8 = 0x63;
pub const OP_ENDIF: u8 = 0x68;
pub const OP_RETURN: u8 = 0x6a;

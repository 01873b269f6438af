use super::*;

pub mod opcode;
mod reader;

pub use self::reader::{Instruction, PushResult, ScriptError, ScriptReader};

/// Largest single push the script interpreter accepts.
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

/// Appends `data` to `script` using the smallest push opcode that can carry it.
pub fn push_data(script: &mut Vec<u8>, data: &[u8]) {
  let len = data.len();

  if len <= usize::from(opcode::OP_PUSHBYTES_75) {
    script.push(u8::try_from(len).unwrap_or_default());
  } else if let Ok(len) = u8::try_from(len) {
    script.push(opcode::OP_PUSHDATA1);
    script.push(len);
  } else if let Ok(len) = u16::try_from(len) {
    script.push(opcode::OP_PUSHDATA2);
    script.extend_from_slice(&len.to_le_bytes());
  } else {
    script.push(opcode::OP_PUSHDATA4);
    script.extend_from_slice(
      &u32::try_from(len)
        .expect("push larger than 4 GiB")
        .to_le_bytes(),
    );
  }

  script.extend_from_slice(data);
}

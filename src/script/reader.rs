use {super::opcode, thiserror::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScriptError {
  #[error("read of {requested} bytes at offset {offset} exceeds the {remaining} remaining")]
  OutOfBounds {
    offset: usize,
    requested: usize,
    remaining: usize,
  },
  #[error("invalid push opcode {opcode:#04x} at offset {offset}")]
  InvalidPushOpcode { opcode: u8, offset: usize },
}

/// Payload of a single push opcode, borrowed from the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushResult<'a> {
  pub data: &'a [u8],
  /// Bytes consumed, counting the opcode and any length prefix.
  pub consumed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
  Push(&'a [u8]),
  Op(u8),
}

/// Forward-only cursor over script bytes.
///
/// Every read is bounds checked against the remaining bytes before anything is
/// sliced, and a failed read leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ScriptReader<'a> {
  buffer: &'a [u8],
  position: usize,
}

impl<'a> ScriptReader<'a> {
  pub fn new(buffer: &'a [u8]) -> Self {
    Self {
      buffer,
      position: 0,
    }
  }

  /// Starts reading at `position`, which must not be past the end of `buffer`.
  pub fn at(buffer: &'a [u8], position: usize) -> Self {
    assert!(
      position <= buffer.len(),
      "cursor position {position} past end of {}-byte buffer",
      buffer.len()
    );

    Self { buffer, position }
  }

  pub fn position(&self) -> usize {
    self.position
  }

  pub fn remaining(&self) -> usize {
    self.buffer.len() - self.position
  }

  pub fn is_empty(&self) -> bool {
    self.remaining() == 0
  }

  pub fn peek(&self) -> Option<u8> {
    self.buffer.get(self.position).copied()
  }

  pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ScriptError> {
    if n > self.remaining() {
      return Err(ScriptError::OutOfBounds {
        offset: self.position,
        requested: n,
        remaining: self.remaining(),
      });
    }

    let bytes = &self.buffer[self.position..self.position + n];
    self.position += n;
    Ok(bytes)
  }

  /// Reads one data push. `OP_0` and every non-push opcode are rejected.
  pub fn read_push(&mut self) -> Result<PushResult<'a>, ScriptError> {
    let start = self.position;

    let result = match self.read_u8()? {
      opcode @ opcode::OP_PUSHBYTES_1..=opcode::OP_PUSHBYTES_75 => {
        self.read_bytes(usize::from(opcode))
      }
      opcode::OP_PUSHDATA1 => self.read_length(1).and_then(|n| self.read_bytes(n)),
      opcode::OP_PUSHDATA2 => self.read_length(2).and_then(|n| self.read_bytes(n)),
      opcode::OP_PUSHDATA4 => self.read_length(4).and_then(|n| self.read_bytes(n)),
      opcode => Err(ScriptError::InvalidPushOpcode {
        opcode,
        offset: start,
      }),
    };

    match result {
      Ok(data) => Ok(PushResult {
        data,
        consumed: self.position - start,
      }),
      Err(err) => {
        self.position = start;
        Err(err)
      }
    }
  }

  /// Reads one instruction, treating `OP_0` as an empty push.
  pub fn read_instruction(&mut self) -> Result<Instruction<'a>, ScriptError> {
    match self.peek() {
      Some(opcode::OP_0) => {
        self.position += 1;
        Ok(Instruction::Push(&[]))
      }
      Some(opcode::OP_PUSHBYTES_1..=opcode::OP_PUSHDATA4) => {
        self.read_push().map(|push| Instruction::Push(push.data))
      }
      Some(opcode) => {
        self.position += 1;
        Ok(Instruction::Op(opcode))
      }
      None => Err(ScriptError::OutOfBounds {
        offset: self.position,
        requested: 1,
        remaining: 0,
      }),
    }
  }

  fn read_u8(&mut self) -> Result<u8, ScriptError> {
    Ok(self.read_bytes(1)?[0])
  }

  fn read_length(&mut self, width: usize) -> Result<usize, ScriptError> {
    let offset = self.position;
    let bytes = self.read_bytes(width)?;

    let mut le = [0; 4];
    le[..width].copy_from_slice(bytes);

    usize::try_from(u32::from_le_bytes(le)).map_err(|_| ScriptError::OutOfBounds {
      offset,
      requested: usize::MAX,
      remaining: self.remaining(),
    })
  }
}

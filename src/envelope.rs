//! Locating and reading `OP_FALSE OP_IF … OP_ENDIF` envelopes in witness bytes.

use {
  super::*,
  crate::script::opcode::{self, OP_ENDIF, OP_FALSE, OP_IF, OP_PUSHBYTES_3},
};

pub(crate) const PROTOCOL_ID: [u8; 3] = *b"ord";

/// `OP_FALSE OP_IF OP_PUSHBYTES_3 "ord"`
pub const INSCRIPTION_MARKER: [u8; 6] = [
  OP_FALSE,
  OP_IF,
  OP_PUSHBYTES_3,
  PROTOCOL_ID[0],
  PROTOCOL_ID[1],
  PROTOCOL_ID[2],
];

static PUSHNUM_VALUES: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
static PUSHNUM_NEG1: [u8; 1] = [0x81];

/// Finds the first `marker` at or after `from` and returns the offset just past it.
pub fn locate(haystack: &[u8], marker: &[u8], from: usize) -> Option<usize> {
  assert!(!marker.is_empty(), "envelope marker must not be empty");

  haystack
    .get(from..)?
    .windows(marker.len())
    .position(|window| window == marker)
    .map(|position| from + position + marker.len())
}

/// The fields and body segments of one envelope, borrowed from the witness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Envelope<'a> {
  /// Offset of the marker within the witness bytes.
  pub offset: usize,
  /// Offset just past the closing `OP_ENDIF`, or the end of the buffer.
  pub end: usize,
  pub fields: Vec<(&'a [u8], &'a [u8])>,
  /// `None` when the envelope closed before an `OP_0` body separator.
  pub body: Option<Vec<&'a [u8]>>,
  pub incomplete_field: bool,
  pub pushnum: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
  ReadingFields,
  ReadingBody,
  Done,
}

impl<'a> Envelope<'a> {
  /// Reads every inscription envelope in `witness`. A malformed envelope
  /// invalidates the whole witness.
  pub fn from_witness(witness: &'a [u8]) -> Result<Vec<Self>, ScriptError> {
    let mut envelopes = Vec::new();
    let mut from = 0;

    while let Some(start) = locate(witness, &INSCRIPTION_MARKER, from) {
      let envelope = Self::parse(witness, start - INSCRIPTION_MARKER.len(), start)?;
      from = envelope.end;
      envelopes.push(envelope);
    }

    Ok(envelopes)
  }

  /// Reads one envelope whose fields begin at `start`.
  pub fn parse(witness: &'a [u8], offset: usize, start: usize) -> Result<Self, ScriptError> {
    let mut reader = ScriptReader::at(witness, start);
    let mut envelope = Envelope {
      offset,
      ..default()
    };
    let mut state = State::ReadingFields;

    while state != State::Done {
      state = match state {
        State::ReadingFields => match reader.peek() {
          None => State::Done,
          Some(opcode::OP_0) => {
            reader.read_bytes(1)?;
            envelope.body = Some(Vec::new());
            State::ReadingBody
          }
          Some(OP_ENDIF) => {
            reader.read_bytes(1)?;
            State::Done
          }
          Some(_) => {
            let tag = envelope.read_element(&mut reader)?;

            match reader.peek() {
              None => {
                envelope.incomplete_field = true;
                State::Done
              }
              Some(OP_ENDIF) => {
                reader.read_bytes(1)?;
                envelope.incomplete_field = true;
                State::Done
              }
              Some(opcode::OP_0) => {
                reader.read_bytes(1)?;
                envelope.fields.push((tag, &[]));
                State::ReadingFields
              }
              Some(_) => {
                let value = envelope.read_element(&mut reader)?;
                envelope.fields.push((tag, value));
                State::ReadingFields
              }
            }
          }
        },
        State::ReadingBody => match reader.peek() {
          None => State::Done,
          Some(OP_ENDIF) => {
            reader.read_bytes(1)?;
            State::Done
          }
          Some(opcode::OP_0) => {
            reader.read_bytes(1)?;
            State::ReadingBody
          }
          Some(_) => {
            let segment = envelope.read_element(&mut reader)?;
            if let Some(body) = envelope.body.as_mut() {
              body.push(segment);
            }
            State::ReadingBody
          }
        },
        State::Done => State::Done,
      };
    }

    envelope.end = reader.position();

    Ok(envelope)
  }

  /// Whether a content type field is present, without assembling the body.
  pub fn has_content_type(&self) -> bool {
    self
      .fields
      .iter()
      .any(|(tag, _)| *tag == crate::inscription::Tag::ContentType.bytes())
  }

  pub fn body_len(&self) -> usize {
    self
      .body
      .as_ref()
      .map(|segments| segments.iter().map(|segment| segment.len()).sum())
      .unwrap_or_default()
  }

  fn read_element(&mut self, reader: &mut ScriptReader<'a>) -> Result<&'a [u8], ScriptError> {
    let offset = reader.position();

    match reader.read_instruction()? {
      Instruction::Push(data) => Ok(data),
      Instruction::Op(opcode::OP_1NEGATE) => {
        self.pushnum = true;
        Ok(&PUSHNUM_NEG1)
      }
      Instruction::Op(op @ opcode::OP_PUSHNUM_1..=opcode::OP_PUSHNUM_16) => {
        self.pushnum = true;
        let index = usize::from(op - opcode::OP_PUSHNUM_1);
        Ok(std::slice::from_ref(&PUSHNUM_VALUES[index]))
      }
      Instruction::Op(op) => Err(ScriptError::InvalidPushOpcode { opcode: op, offset }),
    }
  }
}

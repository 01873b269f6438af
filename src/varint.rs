//! LEB128 integers used by Runestone payloads.

use thiserror::Error;

/// Bytes needed to hold any `u128`: 18 groups of seven bits plus two.
pub const MAX_LEN: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("varint longer than {MAX_LEN} bytes or larger than u128::MAX")]
  Overflow,
  #[error("varint is missing its final byte")]
  Unterminated,
}

pub fn encode_to_vec(mut n: u128, v: &mut Vec<u8>) {
  while n >> 7 > 0 {
    v.push(n.to_le_bytes()[0] | 0b1000_0000);
    n >>= 7;
  }

  v.push(n.to_le_bytes()[0]);
}

pub fn encode(n: u128) -> Vec<u8> {
  let mut v = Vec::new();
  encode_to_vec(n, &mut v);
  v
}

/// Decodes one integer from the front of `buffer`, returning it together with
/// the number of bytes it occupied.
pub fn decode(buffer: &[u8]) -> Result<(u128, usize), Error> {
  let mut n = 0u128;

  for (i, &byte) in buffer.iter().enumerate() {
    if i >= MAX_LEN {
      return Err(Error::Overflow);
    }

    let value = u128::from(byte & 0b0111_1111);

    // the last group may only contribute the top two bits
    if i == MAX_LEN - 1 && value > 0b11 {
      return Err(Error::Overflow);
    }

    n |= value << (7 * i);

    if byte & 0b1000_0000 == 0 {
      return Ok((n, i + 1));
    }
  }

  Err(Error::Unterminated)
}

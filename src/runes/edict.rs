use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edict {
  pub id: RuneId,
  pub amount: u128,
  pub output: u32,
}

impl Edict {
  /// `output` may equal the output count, which splits `amount` across all
  /// non-`OP_RETURN` outputs.
  pub fn from_integers(tx: &Transaction, id: RuneId, amount: u128, output: u128) -> Option<Self> {
    let output = u32::try_from(output).ok()?;

    if u64::from(output) > u64::try_from(tx.vout.len()).ok()? {
      return None;
    }

    Some(Self { id, amount, output })
  }
}

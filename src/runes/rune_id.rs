use super::*;

/// Block height and transaction index of an etching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RuneId {
  pub block: u64,
  pub tx: u32,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RuneIdError {
  #[error("missing `:` separator")]
  Separator,
  #[error("invalid block height: {0}")]
  Block(std::num::ParseIntError),
  #[error("invalid transaction index: {0}")]
  Transaction(std::num::ParseIntError),
}

impl RuneId {
  /// Block zero only holds the reserved id `0:0`.
  pub fn new(block: u64, tx: u32) -> Option<Self> {
    let id = Self { block, tx };

    if id.block == 0 && id.tx > 0 {
      return None;
    }

    Some(id)
  }

  /// Delta from `self` to `next`, as stored in a runestone body.
  pub fn delta(self, next: Self) -> Option<(u128, u128)> {
    let block = next.block.checked_sub(self.block)?;

    let tx = if block == 0 {
      next.tx.checked_sub(self.tx)?
    } else {
      next.tx
    };

    Some((block.into(), tx.into()))
  }

  /// Applies a body delta; the tx index is relative only within the same block.
  pub fn next(self, block: u128, tx: u128) -> Option<Self> {
    Self::new(
      self.block.checked_add(block.try_into().ok()?)?,
      if block == 0 {
        self.tx.checked_add(tx.try_into().ok()?)?
      } else {
        tx.try_into().ok()?
      },
    )
  }
}

impl Display for RuneId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}:{}", self.block, self.tx)
  }
}

impl FromStr for RuneId {
  type Err = RuneIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (block, tx) = s.split_once(':').ok_or(RuneIdError::Separator)?;

    Ok(Self {
      block: block.parse().map_err(RuneIdError::Block)?,
      tx: tx.parse().map_err(RuneIdError::Transaction)?,
    })
  }
}

impl Serialize for RuneId {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for RuneId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    crate::inscription_id::DeserializeFromStr::deserialize(deserializer)
      .map(|crate::inscription_id::DeserializeFromStr(id)| id)
  }
}

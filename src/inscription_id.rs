use {super::*, thiserror::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InscriptionId {
  pub txid: Txid,
  pub index: u32,
}

#[derive(Debug, Error)]
pub enum InscriptionIdError {
  #[error("missing `i` separator")]
  Separator,
  #[error("invalid txid: {0}")]
  Txid(bitcoin::hashes::hex::Error),
  #[error("invalid index: {0}")]
  Index(std::num::ParseIntError),
}

impl InscriptionId {
  /// Decodes a parent or delegate field: a 32-byte txid followed by up to
  /// four little-endian index bytes with no trailing zero.
  pub fn from_value(value: &[u8]) -> Option<Self> {
    const TXID_LEN: usize = 32;

    if value.len() < TXID_LEN || value.len() > TXID_LEN + 4 {
      return None;
    }

    let (txid, index) = value.split_at(TXID_LEN);

    if index.last() == Some(&0) {
      return None;
    }

    let mut le = [0; 4];
    le[..index.len()].copy_from_slice(index);

    Some(Self {
      txid: Txid::from_slice(txid).ok()?,
      index: u32::from_le_bytes(le),
    })
  }
}

impl Display for InscriptionId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}i{}", self.txid, self.index)
  }
}

impl FromStr for InscriptionId {
  type Err = InscriptionIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (txid, index) = s.split_once('i').ok_or(InscriptionIdError::Separator)?;

    Ok(Self {
      txid: txid.parse().map_err(InscriptionIdError::Txid)?,
      index: index.parse().map_err(InscriptionIdError::Index)?,
    })
  }
}

impl Serialize for InscriptionId {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for InscriptionId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    DeserializeFromStr::deserialize(deserializer).map(|DeserializeFromStr(id)| id)
  }
}

/// Deserializes any `FromStr` type from a JSON string.
pub(crate) struct DeserializeFromStr<T>(pub(crate) T);

impl<'de, T: FromStr> Deserialize<'de> for DeserializeFromStr<T>
where
  T::Err: Display,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Ok(Self(
      String::deserialize(deserializer)?
        .parse()
        .map_err(serde::de::Error::custom)?,
    ))
  }
}

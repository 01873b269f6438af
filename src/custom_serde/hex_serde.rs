use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub struct HexSerde;

impl HexSerde {
  pub fn serialize<S>(val: &[u8], serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    hex::encode(val).serialize(serializer)
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
  where
    D: Deserializer<'de>,
  {
    hex::decode(String::deserialize(deserializer)?)
      .map_err(|e| de::Error::custom(format!("invalid hex string: {}", e)))
  }
}

pub struct OptionHexSerde;

impl OptionHexSerde {
  pub fn serialize<S>(val: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    val.as_ref().map(hex::encode).serialize(serializer)
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<String>::deserialize(deserializer)?
      .map(hex::decode)
      .transpose()
      .map_err(|e| de::Error::custom(format!("invalid hex string: {}", e)))
  }
}

/// A witness stack as a list of hex strings; an absent or `null` witness is `None`.
pub struct WitnessSerde;

impl WitnessSerde {
  pub fn serialize<S>(val: &Option<Vec<Vec<u8>>>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    val
      .as_ref()
      .map(|items| items.iter().map(hex::encode).collect::<Vec<String>>())
      .serialize(serializer)
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<Vec<u8>>>, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<Vec<String>>::deserialize(deserializer)?
      .map(|items| items.iter().map(hex::decode).collect::<Result<Vec<_>, _>>())
      .transpose()
      .map_err(|e| de::Error::custom(format!("invalid witness item: {}", e)))
  }
}

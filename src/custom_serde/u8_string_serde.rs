use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// An optional `u8` carried as a decimal string, the way token JSON encodes `dec`.
pub struct OptionU8StringSerde;

impl OptionU8StringSerde {
  pub fn serialize<S>(val: &Option<u8>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    val.map(|v| v.to_string()).serialize(serializer)
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<String>::deserialize(deserializer)?
      .map(|s| u8::from_str(&s))
      .transpose()
      .map_err(|e| de::Error::custom(format!("u8 from string error: {}", e)))
  }
}

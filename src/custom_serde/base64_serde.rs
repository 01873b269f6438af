use {
  base64::{engine::general_purpose::STANDARD, Engine},
  serde::{de, Deserialize, Deserializer, Serialize, Serializer},
};

pub struct Base64Serde;

impl Base64Serde {
  pub fn serialize<S>(val: &[u8], serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    STANDARD.encode(val).serialize(serializer)
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
  where
    D: Deserializer<'de>,
  {
    STANDARD
      .decode(String::deserialize(deserializer)?)
      .map_err(|e| de::Error::custom(format!("invalid base64 string: {}", e)))
  }
}

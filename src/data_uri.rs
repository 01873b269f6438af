//! `data:<content-type>;base64,<payload>` URIs for inscription bodies.

use {
  super::*,
  base64::{engine::general_purpose::STANDARD, Engine},
  thiserror::Error,
};

const SCHEME: &str = "data:";
const BASE64_SUFFIX: &str = ";base64";
const DEFAULT_CONTENT_TYPE: &str = "text/plain;charset=US-ASCII";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUri {
  pub content_type: String,
  #[serde(with = "Base64Serde")]
  pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUriError {
  #[error("missing `data:` scheme")]
  Scheme,
  #[error("missing `,` before payload")]
  Separator,
  #[error("invalid base64 payload: {0}")]
  Base64(String),
  #[error("invalid percent-encoding at offset {0}")]
  PercentEncoding(usize),
}

pub fn encode(content_type: &str, body: &[u8]) -> String {
  format!("{SCHEME}{content_type}{BASE64_SUFFIX},{}", STANDARD.encode(body))
}

pub fn decode_data_uri(uri: &str) -> Result<DataUri, DataUriError> {
  let rest = uri
    .get(..SCHEME.len())
    .filter(|scheme| scheme.eq_ignore_ascii_case(SCHEME))
    .map(|_| &uri[SCHEME.len()..])
    .ok_or(DataUriError::Scheme)?;

  let (meta, payload) = rest.split_once(',').ok_or(DataUriError::Separator)?;

  let (content_type, data) = match meta.strip_suffix(BASE64_SUFFIX) {
    Some(content_type) => (
      content_type,
      STANDARD
        .decode(payload.trim())
        .map_err(|err| DataUriError::Base64(err.to_string()))?,
    ),
    None => (meta, percent_decode(payload)?),
  };

  Ok(DataUri {
    content_type: if content_type.is_empty() {
      DEFAULT_CONTENT_TYPE.into()
    } else {
      content_type.into()
    },
    data,
  })
}

fn percent_decode(payload: &str) -> Result<Vec<u8>, DataUriError> {
  let bytes = payload.as_bytes();
  let mut decoded = Vec::with_capacity(bytes.len());
  let mut i = 0;

  while i < bytes.len() {
    if bytes[i] == b'%' {
      let pair = bytes
        .get(i + 1..i + 3)
        .and_then(|pair| hex::decode(pair).ok())
        .ok_or(DataUriError::PercentEncoding(i))?;
      decoded.extend(pair);
      i += 3;
    } else {
      decoded.push(bytes[i]);
      i += 1;
    }
  }

  Ok(decoded)
}

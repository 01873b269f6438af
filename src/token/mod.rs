//! BRC-20 and SRC-20 token operations carried as JSON inscription bodies.

use {
  self::params::*,
  super::*,
  serde_json::{json, Value},
};

pub use self::{
  error::{JSONError, NumError},
  num::Num,
  operation::{Deploy, Mint, Operation, Transfer},
  tick::Tick,
};

mod error;
mod num;
mod operation;
mod params;
mod tick;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
  #[serde(rename = "brc-20")]
  Brc20,
  #[serde(rename = "src-20")]
  Src20,
}

impl Display for Protocol {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Brc20 => write!(f, "{BRC20_PROTOCOL_LITERAL}"),
      Self::Src20 => write!(f, "{SRC20_PROTOCOL_LITERAL}"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOperation {
  #[serde(rename = "p")]
  pub protocol: Protocol,
  #[serde(flatten)]
  pub operation: Operation,
}

/// SRC-20 writers often emit amounts as bare JSON numbers.
const SRC20_NUMERIC_FIELDS: [&str; 4] = ["max", "lim", "amt", "dec"];

pub fn deserialize_token_operation(
  content_type: &str,
  body: &[u8],
) -> Result<TokenOperation, JSONError> {
  if !is_token_content_type(content_type) {
    return Err(JSONError::UnSupportContentType(content_type.to_string()));
  }

  let body = std::str::from_utf8(body).map_err(|_| JSONError::InvalidJson)?;

  let mut value: Value = serde_json::from_str(body).map_err(|_| JSONError::InvalidJson)?;

  let protocol = if value.get("p") == Some(&json!(BRC20_PROTOCOL_LITERAL)) {
    Protocol::Brc20
  } else if value
    .get("p")
    .and_then(Value::as_str)
    .map(|p| p.eq_ignore_ascii_case(SRC20_PROTOCOL_LITERAL))
    .unwrap_or_default()
  {
    Protocol::Src20
  } else {
    return Err(JSONError::NotTokenJson);
  };

  if protocol == Protocol::Src20 {
    if let Some(object) = value.as_object_mut() {
      for field in SRC20_NUMERIC_FIELDS {
        if let Some(Value::Number(number)) = object.get(field) {
          let number = number.to_string();
          object.insert(field.into(), Value::String(number));
        }
      }
    }
  }

  let operation: Operation = serde_json::from_value(value)
    .map_err(|e| JSONError::ParseOperationJsonError(e.to_string()))?;

  operation.check(protocol)?;

  Ok(TokenOperation {
    protocol,
    operation,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn brc20(json: &str) -> Result<TokenOperation, JSONError> {
    deserialize_token_operation("text/plain;charset=utf-8", json.as_bytes())
  }

  #[test]
  fn test_deploy_deserialize() {
    let max_supply = "21000000".to_string();
    let mint_limit = "1000".to_string();

    let json_str = format!(
      r##"{{
  "p": "brc-20",
  "op": "deploy",
  "tick": "ordi",
  "max": "{max_supply}",
  "lim": "{mint_limit}"
}}"##
    );

    assert_eq!(
      brc20(&json_str).unwrap(),
      TokenOperation {
        protocol: Protocol::Brc20,
        operation: Operation::Deploy(Deploy {
          tick: Tick::from("ordi"),
          max_supply: Num::from_str(&max_supply).unwrap(),
          mint_limit: Some(Num::from_str(&mint_limit).unwrap()),
          decimals: None,
        }),
      }
    );
  }

  #[test]
  fn test_mint_deserialize() {
    assert_eq!(
      brc20(r##"{"p":"brc-20","op":"mint","tick":"ordi","amt":"1000"}"##).unwrap(),
      TokenOperation {
        protocol: Protocol::Brc20,
        operation: Operation::Mint(Mint {
          tick: Tick::from("ordi"),
          amount: Num::from_str("1000").unwrap(),
        }),
      }
    );
  }

  #[test]
  fn test_transfer_deserialize() {
    assert_eq!(
      brc20(r##"{"p":"brc-20","op":"transfer","tick":"ordi","amt":"100"}"##).unwrap(),
      TokenOperation {
        protocol: Protocol::Brc20,
        operation: Operation::Transfer(Transfer {
          tick: Tick::from("ordi"),
          amount: Num::from_str("100").unwrap(),
        }),
      }
    );
  }

  #[test]
  fn test_json_duplicate_field() {
    let json_str = r##"{"p":"brc-20","op":"mint","tick":"smol","amt":"333","amt":"33"}"##;
    assert_eq!(
      brc20(json_str).unwrap().operation,
      Operation::Mint(Mint {
        tick: Tick::from("smol"),
        amount: Num::from_str("33").unwrap()
      })
    )
  }

  #[test]
  fn test_unsupported_content_type() {
    assert_eq!(
      deserialize_token_operation(
        "text/html",
        br##"{"p":"brc-20","op":"mint","tick":"ordi","amt":"1"}"##
      ),
      Err(JSONError::UnSupportContentType("text/html".into()))
    );
    assert!(deserialize_token_operation(
      "application/json",
      br##"{"p":"brc-20","op":"mint","tick":"ordi","amt":"1"}"##
    )
    .is_ok());
  }

  #[test]
  fn test_not_token_json() {
    assert_eq!(brc20("hello"), Err(JSONError::InvalidJson));
    assert_eq!(
      deserialize_token_operation("text/plain", &[0xff, 0xfe]),
      Err(JSONError::InvalidJson)
    );
    assert_eq!(brc20("[1,2]"), Err(JSONError::NotTokenJson));
    assert_eq!(
      brc20(r##"{"p":"BRC-20","op":"mint","tick":"ordi","amt":"1"}"##),
      Err(JSONError::NotTokenJson)
    );
    assert_eq!(
      brc20(r##"{"p":"brc-721","op":"mint","tick":"ordi","amt":"1"}"##),
      Err(JSONError::NotTokenJson)
    );
  }

  #[test]
  fn test_invalid_operation() {
    assert!(matches!(
      brc20(r##"{"p":"brc-20","op":"burn","tick":"ordi","amt":"1"}"##),
      Err(JSONError::ParseOperationJsonError(_))
    ));
    assert!(matches!(
      brc20(r##"{"p":"brc-20","op":"mint","tick":"ordi","amt":1000}"##),
      Err(JSONError::ParseOperationJsonError(_))
    ));
    assert!(matches!(
      brc20(r##"{"p":"brc-20","op":"mint","tick":"ordi","amt":"1e3"}"##),
      Err(JSONError::ParseOperationJsonError(_))
    ));
    assert_eq!(
      brc20(r##"{"p":"brc-20","op":"mint","tick":"ord","amt":"1"}"##),
      Err(JSONError::InvalidTick("ord".into()))
    );
    assert_eq!(
      brc20(r##"{"p":"brc-20","op":"deploy","tick":"ordi","max":"1","dec":"19"}"##),
      Err(JSONError::DecimalsTooLarge(19))
    );
  }

  #[test]
  fn test_src20_accepts_numbers_and_case() {
    assert_eq!(
      brc20(r##"{"p":"SRC-20","op":"deploy","tick":"KEVIN","max":2100,"lim":1,"dec":0}"##)
        .unwrap(),
      TokenOperation {
        protocol: Protocol::Src20,
        operation: Operation::Deploy(Deploy {
          tick: Tick::from("KEVIN"),
          max_supply: Num::from(2100u64),
          mint_limit: Some(Num::from(1u64)),
          decimals: Some(0),
        }),
      }
    );
    assert_eq!(
      brc20(r##"{"p":"src-20","op":"transfer","tick":"K","amt":"2.5"}"##)
        .unwrap()
        .operation,
      Operation::Transfer(Transfer {
        tick: Tick::from("K"),
        amount: Num::from_str("2.5").unwrap(),
      })
    );
    assert_eq!(
      brc20(r##"{"p":"src-20","op":"mint","tick":"STAMPS","amt":1}"##),
      Err(JSONError::InvalidTick("STAMPS".into()))
    );
  }

  #[test]
  fn test_serialize() {
    let operation = brc20(r##"{"p":"brc-20","op":"mint","tick":"ordi","amt":"1000"}"##).unwrap();
    assert_eq!(
      serde_json::to_value(&operation).unwrap(),
      json!({"p": "brc-20", "op": "mint", "tick": "ordi", "amt": "1000"})
    );
    assert_eq!(Protocol::Src20.to_string(), "src-20");
  }
}

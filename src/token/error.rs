use {super::*, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumError {
  #[error("invalid number: {0}")]
  InvalidNum(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JSONError {
  #[error("unsupport content type: {0}")]
  UnSupportContentType(String),

  #[error("invalid json string")]
  InvalidJson,

  #[error("not token json")]
  NotTokenJson,

  #[error("parse operation json error: {0}")]
  ParseOperationJsonError(String),

  #[error("illegal tick '{0}'")]
  InvalidTick(String),

  #[error("decimals {0} too large")]
  DecimalsTooLarge(u8),

  #[error("invalid supply {0}")]
  InvalidSupply(Num),

  #[error(transparent)]
  InvalidNum(#[from] NumError),
}

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tick(String);

impl Tick {
  pub(super) fn check(&self, protocol: Protocol) -> Result<(), JSONError> {
    let valid = match protocol {
      Protocol::Brc20 => BRC20_TICK_BYTE_COUNTS.contains(&self.0.len()),
      Protocol::Src20 => (1..=SRC20_MAX_TICK_CHARS).contains(&self.0.chars().count()),
    };

    if !valid {
      return Err(JSONError::InvalidTick(self.0.clone()));
    }

    Ok(())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for Tick {
  fn from(s: &str) -> Self {
    Self(s.to_string())
  }
}

impl Display for Tick {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

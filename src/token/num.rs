use {
  super::*,
  bigdecimal::{num_bigint::BigInt, BigDecimal, Zero},
};

/// A non-negative decimal amount with at most 18 fractional digits.
#[derive(PartialEq, Eq, PartialOrd, Debug, Clone)]
pub struct Num(BigDecimal);

impl Num {
  pub fn is_zero(&self) -> bool {
    self.0.is_zero()
  }

  pub fn scale(&self) -> i64 {
    let (_, scale) = self.0.as_bigint_and_exponent();
    scale
  }
}

impl From<u64> for Num {
  fn from(n: u64) -> Self {
    Self(BigDecimal::from(n))
  }
}

impl From<u128> for Num {
  fn from(n: u128) -> Self {
    Self(BigDecimal::from(BigInt::from(n)))
  }
}

impl FromStr for Num {
  type Err = NumError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty()
      || s.starts_with('.')
      || s.ends_with('.')
      || s.contains(|c: char| !(c.is_ascii_digit() || c == '.'))
    {
      return Err(NumError::InvalidNum(s.to_string()));
    }

    let num = BigDecimal::from_str(s).map_err(|_| NumError::InvalidNum(s.to_string()))?;

    let (_, scale) = num.as_bigint_and_exponent();
    if scale > i64::from(MAX_DECIMAL_WIDTH) {
      return Err(NumError::InvalidNum(s.to_string()));
    }

    Ok(Self(num))
  }
}

impl Display for Num {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl Serialize for Num {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

impl<'de> Deserialize<'de> for Num {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    String::deserialize(deserializer)?
      .parse()
      .map_err(serde::de::Error::custom)
  }
}

use super::*;

/// A rune name, stored as its modified base-26 integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rune(pub u128);

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RuneError {
  #[error("invalid character `{0}`")]
  Character(char),
  #[error("name out of range")]
  Range,
}

impl Display for Rune {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut n = self.0;
    if n == u128::MAX {
      return write!(f, "BCGDENLQRQWDSLRUGSNLBTMFIJAV");
    }

    n += 1;
    let mut symbol = String::new();
    while n > 0 {
      let letter = u8::try_from((n - 1) % 26).unwrap_or_default();
      symbol.push(char::from(b'A' + letter));
      n = (n - 1) / 26;
    }

    for c in symbol.chars().rev() {
      write!(f, "{c}")?;
    }

    Ok(())
  }
}

impl FromStr for Rune {
  type Err = RuneError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut x = 0u128;
    for (i, c) in s.chars().enumerate() {
      if i > 0 {
        x = x.checked_add(1).ok_or(RuneError::Range)?;
      }
      x = x.checked_mul(26).ok_or(RuneError::Range)?;
      match c {
        'A'..='Z' => {
          x = x
            .checked_add(u128::from(c) - u128::from('A'))
            .ok_or(RuneError::Range)?;
        }
        _ => return Err(RuneError::Character(c)),
      }
    }
    Ok(Rune(x))
  }
}

impl Serialize for Rune {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Rune {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    crate::inscription_id::DeserializeFromStr::deserialize(deserializer)
      .map(|crate::inscription_id::DeserializeFromStr(rune)| rune)
  }
}

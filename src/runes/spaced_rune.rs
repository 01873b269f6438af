use super::*;

/// A rune name with the `•` spacers chosen by its etcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpacedRune {
  pub rune: Rune,
  pub spacers: u32,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SpacedRuneError {
  #[error("leading spacer")]
  LeadingSpacer,
  #[error("trailing spacer")]
  TrailingSpacer,
  #[error("double spacer")]
  DoubleSpacer,
  #[error("invalid character `{0}`")]
  Character(char),
  #[error("invalid rune: {0}")]
  Rune(RuneError),
}

impl FromStr for SpacedRune {
  type Err = SpacedRuneError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut rune = String::new();
    let mut spacers = 0u32;

    for c in s.chars() {
      match c {
        'A'..='Z' => rune.push(c),
        '.' | '•' => {
          let position = rune
            .len()
            .checked_sub(1)
            .ok_or(SpacedRuneError::LeadingSpacer)?;
          let flag = u32::try_from(position)
            .ok()
            .and_then(|position| 1u32.checked_shl(position))
            .ok_or(SpacedRuneError::TrailingSpacer)?;
          if spacers & flag != 0 {
            return Err(SpacedRuneError::DoubleSpacer);
          }
          spacers |= flag;
        }
        _ => return Err(SpacedRuneError::Character(c)),
      }
    }

    if usize::try_from(32 - spacers.leading_zeros()).unwrap_or(usize::MAX) >= rune.len() {
      return Err(SpacedRuneError::TrailingSpacer);
    }

    Ok(SpacedRune {
      rune: rune.parse().map_err(SpacedRuneError::Rune)?,
      spacers,
    })
  }
}

impl Display for SpacedRune {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let rune = self.rune.to_string();

    for (i, c) in rune.chars().enumerate() {
      write!(f, "{c}")?;

      let spaced = u32::try_from(i)
        .ok()
        .and_then(|i| 1u32.checked_shl(i))
        .map(|flag| self.spacers & flag != 0)
        .unwrap_or_default();

      if i < rune.len() - 1 && spaced {
        write!(f, "•")?;
      }
    }

    Ok(())
  }
}

impl Serialize for SpacedRune {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for SpacedRune {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    crate::inscription_id::DeserializeFromStr::deserialize(deserializer)
      .map(|crate::inscription_id::DeserializeFromStr(rune)| rune)
  }
}

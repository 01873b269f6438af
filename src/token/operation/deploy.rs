use {super::*, crate::custom_serde::OptionU8StringSerde};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Deploy {
  #[serde(rename = "tick")]
  pub tick: Tick,
  #[serde(rename = "max")]
  pub max_supply: Num,
  #[serde(rename = "lim", default, skip_serializing_if = "Option::is_none")]
  pub mint_limit: Option<Num>,
  #[serde(
    rename = "dec",
    default,
    skip_serializing_if = "Option::is_none",
    with = "OptionU8StringSerde"
  )]
  pub decimals: Option<u8>,
}

impl Deploy {
  pub(super) fn check(&self, protocol: Protocol) -> Result<(), JSONError> {
    self.tick.check(protocol)?;

    if self.max_supply > *MAXIMUM_SUPPLY {
      return Err(JSONError::InvalidSupply(self.max_supply.clone()));
    }

    if let Some(decimals) = self.decimals {
      if decimals > MAX_DECIMAL_WIDTH {
        return Err(JSONError::DecimalsTooLarge(decimals));
      }
    }

    Ok(())
  }
}

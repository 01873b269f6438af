use {super::*, clap::ValueEnum};

#[derive(Default, ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
  #[default]
  #[value(alias = "main")]
  Mainnet,
  #[value(alias = "test")]
  Testnet,
  Signet,
  Regtest,
}

impl Chain {
  pub fn network(self) -> Network {
    match self {
      Self::Mainnet => Network::Bitcoin,
      Self::Testnet => Network::Testnet,
      Self::Signet => Network::Signet,
      Self::Regtest => Network::Regtest,
    }
  }

  /// Renders the address an output script pays to, if it has a standard form.
  pub fn address_from_script(self, script: &[u8]) -> Option<String> {
    bitcoin::Address::from_script(bitcoin::Script::from_bytes(script), self.network())
      .ok()
      .map(|address| address.to_string())
  }
}

impl Display for Chain {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Mainnet => "mainnet",
        Self::Regtest => "regtest",
        Self::Signet => "signet",
        Self::Testnet => "testnet",
      }
    )
  }
}

impl FromStr for Chain {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "mainnet" | "main" => Ok(Self::Mainnet),
      "testnet" | "test" => Ok(Self::Testnet),
      "signet" => Ok(Self::Signet),
      "regtest" => Ok(Self::Regtest),
      _ => bail!("invalid chain: {s}"),
    }
  }
}

#![allow(clippy::too_many_arguments, clippy::type_complexity)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    config::Config,
    custom_serde::{Base64Serde, HexSerde, OptionHexSerde, WitnessSerde},
    options::{Options, Settings},
    subcommand::{Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, Context, Error},
  bitcoin::{hashes::Hash, Network, Txid},
  clap::Parser,
  serde::{Deserialize, Deserializer, Serialize, Serializer},
  std::{
    collections::{BTreeMap, HashMap, VecDeque},
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    str::FromStr,
  },
};

pub use crate::{
  artifact::{
    get_transaction_flags, has_brc20, has_cat21, has_inscription, has_runestone, has_src20,
    parse_digital_artifacts, ArtifactParser, Cat21Artifact, DigitalArtifact, InscriptionArtifact,
    RuneArtifact, TokenArtifact,
  },
  cache::ArtifactCache,
  cat21::Cat21,
  chain::Chain,
  data_uri::{decode_data_uri, DataUri, DataUriError},
  envelope::{Envelope, INSCRIPTION_MARKER},
  flags::TransactionFlags,
  inscription::ParsedInscription,
  inscription_id::InscriptionId,
  media::Media,
  runes::{
    Cenotaph, Edict, Etching, Flaw, Rune, RuneId, Runestone, RunestoneMessage, SpacedRune, Terms,
  },
  script::{Instruction, PushResult, ScriptError, ScriptReader},
  token::{Operation, Protocol, TokenOperation},
  transaction::{Transaction, TxIn, TxOut},
};

fn default<T: Default>() -> T {
  Default::default()
}

mod arguments;
mod artifact;
mod cache;
pub mod cat21;
mod chain;
mod config;
mod custom_serde;
pub mod data_uri;
pub mod envelope;
mod flags;
pub mod inscription;
mod inscription_id;
mod logger;
mod media;
mod options;
pub mod runes;
pub mod script;
pub mod subcommand;
pub mod token;
mod transaction;
pub mod varint;

type Result<T = (), E = Error> = std::result::Result<T, E>;

pub fn main() {
  let args = Arguments::parse();

  let settings = match args.options.settings() {
    Ok(settings) => settings,
    Err(err) => {
      eprintln!("error: {err}");
      process::exit(1);
    }
  };

  if let Err(err) = logger::init(settings.log_level, settings.log_dir.as_deref()) {
    eprintln!("error: failed to initialize logger: {err}");
    process::exit(1);
  }

  match args.run(settings) {
    Err(err) => {
      eprintln!("error: {err}");
      err
        .chain()
        .skip(1)
        .for_each(|cause| eprintln!("because: {cause}"));
      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => output.print_json(),
  }
}

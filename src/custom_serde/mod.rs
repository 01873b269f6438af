mod base64_serde;
mod hex_serde;
mod u8_string_serde;

pub(crate) use self::{
  base64_serde::Base64Serde,
  hex_serde::{HexSerde, OptionHexSerde, WitnessSerde},
  u8_string_serde::OptionU8StringSerde,
};

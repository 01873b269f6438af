#![no_main]

use {
  libfuzzer_sys::fuzz_target,
  ordpool::{Envelope, ParsedInscription, INSCRIPTION_MARKER},
};

fuzz_target!(|input: &[u8]| {
  let _ = Envelope::from_witness(input);

  let mut witness = INSCRIPTION_MARKER.to_vec();
  witness.extend_from_slice(input);

  for inscription in ParsedInscription::from_witness(&witness) {
    let _ = inscription.media();
    let _ = inscription.data_uri();
  }
});

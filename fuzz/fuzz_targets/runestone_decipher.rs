#![no_main]

use {
  arbitrary::Arbitrary,
  bitcoin::{hashes::Hash, Txid},
  libfuzzer_sys::fuzz_target,
  ordpool::{get_transaction_flags, parse_digital_artifacts, Runestone, Transaction, TxIn, TxOut},
};

#[derive(Arbitrary, Debug)]
struct Input {
  locktime: u32,
  witness: Vec<Vec<u8>>,
  payload: Vec<u8>,
  outputs: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
  let mut runestone = vec![0x6a, 0x5d];
  runestone.extend_from_slice(&input.payload);

  let tx = Transaction {
    txid: Txid::all_zeros(),
    locktime: input.locktime,
    vin: vec![TxIn {
      witness: Some(input.witness),
    }],
    vout: std::iter::once(runestone)
      .chain(input.outputs)
      .map(|scriptpubkey| TxOut {
        scriptpubkey,
        scriptpubkey_address: None,
        value: 0,
      })
      .collect(),
    fee: None,
    weight: None,
  };

  let _ = Runestone::decipher(&tx);

  let artifacts = parse_digital_artifacts(&tx);
  assert_eq!(artifacts, parse_digital_artifacts(&tx));
  let _ = get_transaction_flags(&tx);
});

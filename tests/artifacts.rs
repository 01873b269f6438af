use super::*;

fn parse(tx: &bitcoin::Transaction) -> (Transaction, Vec<DigitalArtifact>) {
  let tx = Transaction::from(tx);
  let artifacts = parse_digital_artifacts(&tx);
  (tx, artifacts)
}

#[test]
fn hello_world_inscription() {
  let (tx, artifacts) = parse(&transaction(inscription("text/plain", "hello"), 0, &[p2tr()]));

  let [DigitalArtifact::Inscription(artifact)] = &artifacts[..] else {
    panic!("unexpected artifacts: {artifacts:?}");
  };

  pretty_assert_eq!(artifact.unique_id, format!("{}i0", tx.txid));
  pretty_assert_eq!(artifact.inscription.content_type, "text/plain");
  pretty_assert_eq!(artifact.inscription.body_str(), Some("hello"));
  pretty_assert_eq!(
    artifact.inscription.data_uri(),
    "data:text/plain;base64,aGVsbG8="
  );
  assert!(has_inscription(&tx));
  pretty_assert_eq!(get_transaction_flags(&tx), TransactionFlags::INSCRIPTION);
}

#[test]
fn transaction_without_witness() {
  let (tx, artifacts) = parse(&transaction(Witness::new(), 0, &[p2tr()]));

  assert!(artifacts.is_empty());
  assert!(!has_inscription(&tx));
  assert!(!has_runestone(&tx));
  assert!(get_transaction_flags(&tx).is_empty());
}

#[test]
fn reinscription_in_one_witness_is_a_batch() {
  let png = envelope(&[b"ord", &[1], b"image/png", &[], &[0x89]]).to_vec();
  let text = envelope(&[b"ord", &[1], b"text/plain", &[], b"a"]).to_vec();
  let witness = [png[0].clone(), text[0].clone()];

  let (tx, artifacts) = parse(&transaction(Witness::from_slice(&witness), 0, &[p2tr()]));

  pretty_assert_eq!(
    artifacts
      .iter()
      .map(DigitalArtifact::unique_id)
      .collect::<Vec<&str>>(),
    vec![format!("{}i0", tx.txid), format!("{}i1", tx.txid)]
  );
  pretty_assert_eq!(
    get_transaction_flags(&tx),
    TransactionFlags::INSCRIPTION | TransactionFlags::BATCH_INSCRIPTION
  );
}

#[test]
fn brc20_deploy() {
  let (tx, artifacts) = parse(&transaction(
    inscription(
      "text/plain;charset=utf-8",
      r#"{"p":"brc-20","op":"deploy","tick":"ordi","max":"21000000","lim":"1000"}"#,
    ),
    0,
    &[p2tr()],
  ));

  let [DigitalArtifact::Brc20(token)] = &artifacts[..] else {
    panic!("unexpected artifacts: {artifacts:?}");
  };

  pretty_assert_eq!(token.operation.operation.tick().as_str(), "ordi");
  assert!(has_brc20(&tx));
  assert!(!has_src20(&tx));
  pretty_assert_eq!(
    get_transaction_flags(&tx),
    TransactionFlags::INSCRIPTION | TransactionFlags::BRC20_DEPLOY
  );
}

#[test]
fn brc20_with_numeric_amount_is_a_plain_inscription() {
  let (tx, artifacts) = parse(&transaction(
    inscription("text/plain", r#"{"p":"brc-20","op":"mint","tick":"ordi","amt":1000}"#),
    0,
    &[p2tr()],
  ));

  assert!(matches!(artifacts[..], [DigitalArtifact::Inscription(_)]));
  assert!(!has_brc20(&tx));
}

#[test]
fn src20_transfer() {
  let (tx, artifacts) = parse(&transaction(
    inscription(
      "application/json",
      r#"{"p":"src-20","op":"transfer","tick":"stamp","amt":100}"#,
    ),
    0,
    &[p2tr()],
  ));

  assert!(matches!(artifacts[..], [DigitalArtifact::Src20(_)]));
  assert!(has_src20(&tx));
  assert!(get_transaction_flags(&tx).contains(TransactionFlags::SRC20_TRANSFER));
}

#[test]
fn rune_etching() {
  let runestone = Runestone {
    etching: Some(Etching {
      divisibility: Some(2),
      premine: Some(1000),
      rune: Some(Rune(99246114928149462)),
      spacers: Some(0b1),
      symbol: Some('$'),
      ..Default::default()
    }),
    pointer: Some(0),
    ..Default::default()
  };

  let (tx, artifacts) = parse(&transaction(
    Witness::new(),
    0,
    &[p2tr(), ScriptBuf::from_bytes(runestone.encipher())],
  ));

  let [DigitalArtifact::Rune(artifact)] = &artifacts[..] else {
    panic!("unexpected artifacts: {artifacts:?}");
  };

  pretty_assert_eq!(artifact.unique_id, format!("rune-{}", tx.txid));
  pretty_assert_eq!(artifact.message, RunestoneMessage::Runestone(runestone));
  assert!(has_runestone(&tx));
  pretty_assert_eq!(get_transaction_flags(&tx), TransactionFlags::RUNE_ETCH);
}

#[test]
fn cenotaph_voids_edicts() {
  let script = ScriptBuf::from_bytes(vec![0x6a, 0x5d, 0x06, 24, 1, 0, 1, 1, 5]);

  let (tx, artifacts) = parse(&transaction(Witness::new(), 0, &[p2tr(), script]));

  let [DigitalArtifact::Rune(artifact)] = &artifacts[..] else {
    panic!("unexpected artifacts: {artifacts:?}");
  };

  assert!(artifact.message.is_cenotaph());
  pretty_assert_eq!(get_transaction_flags(&tx), TransactionFlags::CENOTAPH);
}

#[test]
fn rune_transfer() {
  let runestone = Runestone {
    edicts: vec![Edict {
      id: RuneId::new(840_000, 3).unwrap(),
      amount: 10,
      output: 0,
    }],
    ..Default::default()
  };

  let (tx, _) = parse(&transaction(
    Witness::new(),
    0,
    &[p2tr(), ScriptBuf::from_bytes(runestone.encipher())],
  ));

  pretty_assert_eq!(get_transaction_flags(&tx), TransactionFlags::RUNE_TRANSFER);
}

#[test]
fn cat21_locktime() {
  let (tx, artifacts) = parse(&transaction(Witness::new(), 21, &[p2tr()]));

  let [DigitalArtifact::Cat21(cat)] = &artifacts[..] else {
    panic!("unexpected artifacts: {artifacts:?}");
  };

  pretty_assert_eq!(cat.cat.postage, 546);
  pretty_assert_eq!(cat.cat.satpoint, format!("{}:0:0", tx.txid));
  assert!(cat.cat.owner.as_deref().unwrap().starts_with("bc1p"));
  assert!(has_cat21(&tx));

  let tx = Transaction::from(&transaction(Witness::new(), 20, &[p2tr()]));
  assert!(!has_cat21(&tx));
  assert!(!get_transaction_flags(&tx).contains(TransactionFlags::CAT21));
}

#[test]
fn cat21_owner_follows_chain() {
  let tx = Transaction::from(&transaction(Witness::new(), 21, &[p2tr()]));

  let artifacts = ArtifactParser::new(Chain::Regtest).parse(&tx);

  let [DigitalArtifact::Cat21(cat)] = &artifacts[..] else {
    panic!("unexpected artifacts: {artifacts:?}");
  };

  assert!(cat.cat.owner.as_deref().unwrap().starts_with("bcrt1p"));
}

#[test]
fn everything_at_once() {
  let runestone = Runestone {
    mint: Some(RuneId::new(840_000, 1).unwrap()),
    ..Default::default()
  };

  let (tx, artifacts) = parse(&transaction(
    inscription("text/plain", "gm"),
    21,
    &[p2tr(), ScriptBuf::from_bytes(runestone.encipher())],
  ));

  pretty_assert_eq!(artifacts.len(), 3);
  pretty_assert_eq!(
    get_transaction_flags(&tx),
    TransactionFlags::INSCRIPTION | TransactionFlags::RUNE_MINT | TransactionFlags::CAT21
  );
  pretty_assert_eq!(
    TransactionFlags::from_artifacts(&artifacts),
    get_transaction_flags(&tx)
  );
}

#[test]
fn cache_returns_same_artifacts() {
  let tx = Transaction::from(&transaction(inscription("text/plain", "hello"), 21, &[p2tr()]));

  let mut cache = ArtifactCache::new(ArtifactParser::default(), 8);

  pretty_assert_eq!(cache.artifacts(&tx).to_vec(), parse_digital_artifacts(&tx));
  pretty_assert_eq!(cache.len(), 1);
}

#[test]
fn inscription_json_shape() {
  let (_, artifacts) = parse(&transaction(inscription("text/plain", "hello"), 0, &[p2tr()]));

  let value = serde_json::to_value(&artifacts).unwrap();

  pretty_assert_eq!(value[0]["type"], "inscription");
  pretty_assert_eq!(value[0]["inscription"]["contentType"], "text/plain");
  pretty_assert_eq!(value[0]["inscription"]["body"], "aGVsbG8=");
  pretty_assert_eq!(
    serde_json::from_value::<ParsedInscription>(value[0]["inscription"].clone())
      .unwrap()
      .body,
    b"hello"
  );
}

use {super::*, lru::LruCache, std::num::NonZeroUsize};

pub const DEFAULT_CAPACITY: usize = 1000;

/// Parsed artifacts keyed by txid, evicting the least recently used entry.
/// Parsing is pure, so an entry never needs invalidation.
pub struct ArtifactCache {
  parser: ArtifactParser,
  entries: LruCache<Txid, Vec<DigitalArtifact>>,
}

impl ArtifactCache {
  pub fn new(parser: ArtifactParser, capacity: usize) -> Self {
    let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

    Self {
      parser,
      entries: LruCache::new(capacity),
    }
  }

  pub fn artifacts(&mut self, tx: &Transaction) -> &[DigitalArtifact] {
    let parser = self.parser;
    self.entries.get_or_insert(tx.txid, || parser.parse(tx))
  }

  pub fn get(&mut self, txid: &Txid) -> Option<&[DigitalArtifact]> {
    self.entries.get(txid).map(Vec::as_slice)
  }

  pub fn contains(&self, txid: &Txid) -> bool {
    self.entries.contains(txid)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.entries.cap().get()
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }
}

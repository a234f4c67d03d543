mod concurrency;
mod published_vectors;

/// The corpus shipped in `resources/`, which `master-kat` checks by default.
pub fn bundled_corpus() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/resources/masterdata.txt")
}

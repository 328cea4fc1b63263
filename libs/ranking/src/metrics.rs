//! Stand-in engagement counters. Nothing records real views or
//! comments yet, so each figure is derived from a hash of the blog id
//! and a per-counter salt. The same record always reports the same
//! numbers.

use sha2::{Digest, Sha256};

fn metric(id: &str, salt: &str, lo: u64, span: u64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(id.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);

    lo + u64::from_be_bytes(bytes) % span
}

/// View count in `[100, 1100)`.
pub fn views(id: &str) -> u64 {
    metric(id, "views", 100, 1000)
}

/// Comment count in `[0, 50)`.
pub fn comments(id: &str) -> u64 {
    metric(id, "comments", 0, 50)
}

/// Save count in `[0, 100)`, unless a recorded wishlist count exists.
pub fn saves(id: &str, recorded: Option<u64>) -> u64 {
    match recorded {
        Some(count) => count,
        None => metric(id, "saves", 0, 100),
    }
}

/// Engagement percentage in `[50, 150)`.
pub fn engagement_pct(id: &str) -> u64 {
    metric(id, "engagement", 50, 100)
}

//! Content-hash IDs for lineage paths.
//!
//! Path IDs are derived from the direction tag and the node sequence with
//! SHA256 and base36 encoding, so the same cycle or chain gets the same ID on
//! every run. Format: `{prefix}-{hash}` (e.g., "cycle-3k9x2a7q").

use sha2::{Digest, Sha256};

use crate::domain::{AssetId, PathDirection};

const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the hash part of a path ID
const HASH_LENGTH: usize = 8;

/// Derive the ID for a path.
pub(crate) fn path_id(direction: PathDirection, nodes: &[AssetId]) -> String {
    let prefix = match direction {
        PathDirection::Circular => "cycle",
        PathDirection::Upstream | PathDirection::Downstream => "path",
    };

    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    for node in nodes {
        // Separator keeps ["ab", "c"] and ["a", "bc"] apart
        hasher.update([0u8]);
        hasher.update(node.as_str().as_bytes());
    }
    let hash_bytes = hasher.finalize();

    format!("{}-{}", prefix, encode_base36(&hash_bytes[..8], HASH_LENGTH))
}

/// Encode up to 8 bytes as a fixed-length base36 string.
///
/// Bytes are folded into a `u64` with wrapping arithmetic; callers pass at
/// most 8 bytes so nothing is lost.
fn encode_base36(bytes: &[u8], length: usize) -> String {
    let mut num: u64 = 0;
    for &byte in bytes {
        num = num.wrapping_shl(8).wrapping_add(u64::from(byte));
    }

    let mut result = Vec::with_capacity(length);
    while result.len() < length {
        let remainder = usize::try_from(num % 36).unwrap_or_default();
        result.push(char::from(BASE36_CHARS[remainder]));
        num /= 36;
    }

    result.iter().rev().collect()
}

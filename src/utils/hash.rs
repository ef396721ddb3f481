use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// SHA-256 of a file's full contents, as lowercase hex.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let data = fs::read(path)?;
    Ok(hash_bytes(&data))
}

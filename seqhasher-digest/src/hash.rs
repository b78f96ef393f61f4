//! The hash registry: a closed set of digest algorithms over normalized
//! sequence bytes.
//!
//! Each algorithm maps `bytes -> lowercase hex string` with a fixed width.
//! Unknown names are rejected when the configuration is parsed, before any
//! record is processed. Hashing an empty sequence yields an empty string and
//! a logged warning rather than an error, so a run never aborts on a
//! zero-length record.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use anyhow::bail;
use log::warn;
use md5::Md5;
use sha1::{Digest, Sha1};
use sha3::Sha3_512;

/// Every supported algorithm, in the order reported to users.
pub const SUPPORTED_HASH_TYPES: [HashType; 8] = [
    HashType::Sha1,
    HashType::Sha3,
    HashType::Md5,
    HashType::Xxhash,
    HashType::Cityhash,
    HashType::Murmur3,
    HashType::Nthash,
    HashType::Blake3,
];

/// A digest algorithm from the closed supported set.
///
/// Parsing with [`FromStr`] validates the name against the registry and fails
/// with the full supported list in the message, so configuration errors
/// surface before any stream is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashType {
    /// SHA-1, 40 hex chars.
    Sha1,
    /// SHA3-512, 128 hex chars.
    Sha3,
    /// MD5, 32 hex chars.
    Md5,
    /// 64-bit xxHash (XXH64, seed 0), 16 hex chars.
    Xxhash,
    /// 128-bit CityHash v1.1, 32 hex chars, high half first.
    Cityhash,
    /// 128-bit MurmurHash3 (x64 variant, seed 0), 32 hex chars.
    Murmur3,
    /// 64-bit ntHash over the whole sequence as a single forward k-mer,
    /// 16 hex chars.
    Nthash,
    /// BLAKE3, 64 hex chars.
    Blake3,
}

impl HashType {
    /// The registry name of this algorithm, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            HashType::Sha1 => "sha1",
            HashType::Sha3 => "sha3",
            HashType::Md5 => "md5",
            HashType::Xxhash => "xxhash",
            HashType::Cityhash => "cityhash",
            HashType::Murmur3 => "murmur3",
            HashType::Nthash => "nthash",
            HashType::Blake3 => "blake3",
        }
    }

    /// Compute this algorithm's digest over `data`, hex-encoded in lowercase.
    ///
    /// `data` is expected to be already-normalized sequence bytes; the
    /// registry never normalizes. Empty input returns an empty string and
    /// logs a warning.
    ///
    /// # Examples
    /// ```
    /// use seqhasher_digest::HashType;
    ///
    /// let digest = HashType::Sha1.digest(b"ACTG");
    /// assert_eq!(digest, "65c89f59d38cdbf90dfaf0b0a6884829df8396b0");
    /// ```
    pub fn digest(&self, data: &[u8]) -> String {
        if data.is_empty() {
            warn!(
                "empty sequence provided, resulting in an empty {} digest",
                self.name()
            );
            return String::new();
        }

        match self {
            HashType::Sha1 => format!("{:x}", Sha1::digest(data)),
            HashType::Sha3 => format!("{:x}", Sha3_512::digest(data)),
            HashType::Md5 => format!("{:x}", Md5::digest(data)),
            HashType::Xxhash => format!("{:016x}", xxhash_rust::xxh64::xxh64(data, 0)),
            HashType::Cityhash => {
                let hash = cityhash_rs::cityhash_110_128(data);
                format!("{:016x}{:016x}", (hash >> 64) as u64, hash as u64)
            }
            HashType::Murmur3 => match murmur3::murmur3_x64_128(&mut Cursor::new(data), 0) {
                Ok(hash) => format!("{:032x}", hash),
                Err(e) => {
                    warn!("murmur3 hashing failed: {}", e);
                    String::new()
                }
            },
            HashType::Nthash => match nthash::NtHashForwardIterator::new(data, data.len()) {
                Ok(mut hashes) => match hashes.next() {
                    Some(hash) => format!("{:016x}", hash),
                    None => {
                        warn!("nthash produced no value for a {}-byte sequence", data.len());
                        String::new()
                    }
                },
                Err(e) => {
                    warn!("nthash hashing failed: {}", e);
                    String::new()
                }
            },
            HashType::Blake3 => blake3::hash(data).to_hex().to_string(),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashType {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        for hash_type in SUPPORTED_HASH_TYPES {
            if name == hash_type.name() {
                return Ok(hash_type);
            }
        }
        bail!(
            "invalid hash type: {}. Supported types are: {}",
            name,
            supported_names().join(", ")
        )
    }
}

/// Registry names of all supported algorithms, for error and usage text.
pub fn supported_names() -> Vec<&'static str> {
    SUPPORTED_HASH_TYPES.iter().map(HashType::name).collect()
}

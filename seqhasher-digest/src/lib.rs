//! # Content-derived fingerprints for biological sequences
//!
//! This crate turns FASTA/FASTQ records into hashed, reformatted records: each
//! sequence is normalized (whitespace stripped, optionally upper-cased), run
//! through one or more digest algorithms, and re-emitted with a header that
//! embeds the digests next to the source name and the original identifier.
//! Comparing fingerprints instead of raw residues makes duplicate detection
//! across large datasets cheap.
//!
//! # Module Structure
//!
//! - `normalize` - Whitespace removal and case folding for residue bytes
//! - `hash` - The closed registry of supported digest algorithms
//! - `header` - Output header construction and source-name resolution
//! - `config` - Immutable per-run option snapshot
//! - `pipeline` - The streaming record loop: normalize, hash, compose, emit
//!
//! Record framing, format detection, and transparent decompression are
//! delegated to [`needletail`]; this crate only ever sees parsed records.

pub mod config;
pub mod hash;
pub mod header;
pub mod normalize;
pub mod pipeline;

pub use config::HasherConfig;
pub use hash::{HashType, SUPPORTED_HASH_TYPES};
pub use header::{compose_header, resolve_source_name};
pub use normalize::normalize;
pub use pipeline::process_records;

//! The streaming record pipeline: normalize, hash, compose, emit.
//!
//! Records are pulled one at a time from the needletail reader and fully
//! processed before the next read, so output order always matches input
//! order and no more than one record is ever buffered. Malformed records and
//! per-record write failures are logged and skipped; failing to recognize the
//! input as FASTA/FASTQ at all, or failing to flush the output at the end of
//! the run, is fatal.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use log::warn;
use needletail::parse_fastx_reader;
use needletail::parser::Format;

use crate::config::HasherConfig;
use crate::header::compose_header;
use crate::normalize::normalize;

/// The record identifier: the header token up to the first whitespace.
fn identifier(header: &[u8]) -> &[u8] {
    header
        .split(|byte| byte.is_ascii_whitespace())
        .next()
        .unwrap_or(header)
}

/// Run the hashing pipeline over every record in `input`, writing the
/// transformed records to `output`.
///
/// `input` is any byte stream containing FASTA or FASTQ data; needletail
/// detects the format and transparently decompresses gzip/bzip2/xz/zstd
/// streams. Each record is normalized, hashed with every configured
/// algorithm in order, and re-emitted with the composed header. Output is
/// buffered and flushed once at end of stream.
///
/// # Errors
///
/// Fails if the input cannot be recognized as a sequence stream at all, or
/// if the final flush of the output fails. Per-record problems (a malformed
/// entry, a failed write) are logged and the run continues.
pub fn process_records<R, W>(input: R, output: W, config: &HasherConfig) -> Result<()>
where
    R: io::Read + Send,
    W: Write,
{
    let mut reader =
        parse_fastx_reader(input).context("failed to open input as a FASTA/FASTQ stream")?;
    let mut writer = BufWriter::new(output);

    while let Some(parsed) = reader.next() {
        let record = match parsed {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping unreadable record: {}", e);
                continue;
            }
        };

        let id = String::from_utf8_lossy(identifier(record.id())).into_owned();
        let sequence = normalize(&record.seq(), config.case_sensitive);

        let digests: Vec<String> = config
            .hash_types
            .iter()
            .map(|hash_type| hash_type.digest(&sequence))
            .collect();

        let header = compose_header(&config.source_name, &digests, &id, config.omit_source_name);

        let written = if config.headers_only {
            writeln!(writer, "{}", header)
        } else {
            write_record(&mut writer, &header, &sequence, &record)
        };
        if let Err(e) = written {
            warn!("failed to write record {}: {}", id, e);
        }
    }

    writer.flush().context("failed to flush output")?;
    Ok(())
}

/// Emit one full record, preserving the structural form it arrived in.
///
/// The sequence body is the normalized form; FASTQ quality bytes are passed
/// through unchanged, so a sequence shortened by whitespace removal keeps its
/// original quality string (the original base-to-quality correspondence is
/// not re-aligned).
fn write_record<W: Write>(
    writer: &mut W,
    header: &str,
    sequence: &[u8],
    record: &needletail::parser::SequenceRecord<'_>,
) -> io::Result<()> {
    match record.format() {
        Format::Fasta => {
            write!(writer, ">{}\n", header)?;
            writer.write_all(sequence)?;
            writer.write_all(b"\n")
        }
        Format::Fastq => {
            write!(writer, "@{}\n", header)?;
            writer.write_all(sequence)?;
            writer.write_all(b"\n+\n")?;
            writer.write_all(record.qual().unwrap_or_default())?;
            writer.write_all(b"\n")
        }
    }
}

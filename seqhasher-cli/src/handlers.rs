use std::fs::File;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use seqhasher_digest::{HashType, HasherConfig, process_records, resolve_source_name};

pub fn run_seqhasher(matches: &ArgMatches) -> Result<()> {
    let input_name = matches
        .get_one::<String>("input")
        .expect("An input file is required.");
    let output_name = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("-");

    // Reject unknown hash names before any stream is opened.
    let hash_types = matches
        .get_many::<String>("hash")
        .expect("A hash type is always present.")
        .map(|name| name.trim().parse::<HashType>())
        .collect::<Result<Vec<_>>>()?;

    let config = HasherConfig {
        headers_only: matches.get_flag("headersonly"),
        hash_types,
        omit_source_name: matches.get_flag("nofilename"),
        case_sensitive: matches.get_flag("casesensitive"),
        source_name: resolve_source_name(
            input_name,
            matches.get_one::<String>("name").map(String::as_str),
        ),
    };

    info!(
        "hashing {} with {}",
        input_name,
        config
            .hash_types
            .iter()
            .map(HashType::name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let input = get_input(input_name)?;
    let output = get_output(output_name)?;
    process_records(input, output, &config)
}

fn get_input(name: &str) -> Result<Box<dyn Read + Send>> {
    match name {
        "-" => Ok(Box::new(io::stdin())),
        path => {
            let file =
                File::open(path).with_context(|| format!("failed to open input file {}", path))?;
            Ok(Box::new(file))
        }
    }
}

fn get_output(name: &str) -> Result<Box<dyn Write>> {
    match name {
        "-" => Ok(Box::new(io::stdout())),
        path => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path))?;
            Ok(Box::new(file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::create_seqhasher_cli;
    use std::fs;
    use tempfile::tempdir;

    fn matches_for(args: &[&str]) -> ArgMatches {
        create_seqhasher_cli()
            .try_get_matches_from(args)
            .expect("test invocation must parse")
    }

    #[test]
    fn test_run_seqhasher_rewrites_records() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let input_path = dir.path().join("test.fasta");
        let output_path = dir.path().join("out.fasta");
        fs::write(&input_path, ">seq1\nACTG\n>seq2\nTGCA\n").expect("Failed to write input");

        let matches = matches_for(&[
            "seqhasher",
            input_path.to_str().expect("UTF-8 path"),
            output_path.to_str().expect("UTF-8 path"),
        ]);
        run_seqhasher(&matches).expect("run must succeed");

        let written = fs::read_to_string(&output_path).expect("Failed to read output");
        let expected = ">test.fasta;65c89f59d38cdbf90dfaf0b0a6884829df8396b0;seq1\nACTG\n\
                        >test.fasta;e3da52abc8fbdb38b113a187ed0ac763fa86d1d4;seq2\nTGCA\n";
        assert_eq!(written, expected);
    }

    #[test]
    fn test_run_seqhasher_honors_name_override_and_flags() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let input_path = dir.path().join("test.fasta");
        let output_path = dir.path().join("out.txt");
        fs::write(&input_path, ">seq1\nACTG\n").expect("Failed to write input");

        let matches = matches_for(&[
            "seqhasher",
            "--headersonly",
            "--name",
            "Sample",
            input_path.to_str().expect("UTF-8 path"),
            output_path.to_str().expect("UTF-8 path"),
        ]);
        run_seqhasher(&matches).expect("run must succeed");

        let written = fs::read_to_string(&output_path).expect("Failed to read output");
        assert_eq!(written, "Sample;65c89f59d38cdbf90dfaf0b0a6884829df8396b0;seq1\n");
    }

    #[test]
    fn test_run_seqhasher_rejects_invalid_hash_type() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let input_path = dir.path().join("test.fasta");
        fs::write(&input_path, ">seq1\nACTG\n").expect("Failed to write input");

        let matches = matches_for(&[
            "seqhasher",
            "--hash",
            "invalid,sha1",
            input_path.to_str().expect("UTF-8 path"),
        ]);
        let err = run_seqhasher(&matches).expect_err("invalid hash type must fail");
        let message = err.to_string();
        assert!(message.contains("invalid hash type: invalid"), "got: {}", message);
        assert!(
            message.contains("sha1, sha3, md5, xxhash, cityhash, murmur3, nthash, blake3"),
            "got: {}",
            message
        );
    }

    #[test]
    fn test_run_seqhasher_missing_input_file_is_fatal() {
        let matches = matches_for(&["seqhasher", "nonexistent_file.fasta", "-"]);
        let err = run_seqhasher(&matches).expect_err("missing input must fail");
        assert!(err.to_string().contains("nonexistent_file.fasta"));
    }
}

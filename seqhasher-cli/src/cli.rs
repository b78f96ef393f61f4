use clap::{Arg, ArgAction, Command};

use crate::consts;

pub fn create_seqhasher_cli() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about(
            "Computes content-derived fingerprints for FASTA/FASTQ sequences and rewrites \
             each header to carry the digest(s), the source name, and the original identifier.",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .required(true)
                .help("Input FASTA/FASTQ file (optionally gzip/bzip2/xz/zstd compressed), or '-' for stdin"),
        )
        .arg(Arg::new("output").help("Output file, or '-' (default) for stdout"))
        .arg(
            Arg::new("headersonly")
                .long("headersonly")
                .short('o')
                .action(ArgAction::SetTrue)
                .help("Only output sequence headers, excluding the sequences themselves"),
        )
        .arg(
            Arg::new("hash")
                .long("hash")
                .short('H')
                .value_delimiter(',')
                .default_value("sha1")
                .help("Hash type(s), comma-separated: sha1, sha3, md5, xxhash, cityhash, murmur3, nthash, blake3"),
        )
        .arg(
            Arg::new("nofilename")
                .long("nofilename")
                .short('n')
                .action(ArgAction::SetTrue)
                .help("Omit the file name from the sequence header"),
        )
        .arg(
            Arg::new("casesensitive")
                .long("casesensitive")
                .short('c')
                .action(ArgAction::SetTrue)
                .help("Take sequence case into account. By default, sequences are converted to uppercase"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .short('f')
                .help("Replace the input file's name in the header with this text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase logging verbosity (repeatable)"),
        )
}

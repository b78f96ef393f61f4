//! Output header construction.
//!
//! A composed header carries up to three `;`-separated fields: the resolved
//! source name (unless omitted), the configured digests joined with `;`, and
//! the record's original identifier. Semicolons inside identifiers or
//! override names are not escaped; ambiguous headers are a known limitation
//! of the format.

use std::path::Path;

/// Build the output header for one record.
///
/// Digests are joined with `;` in configured order. With `omit_source_name`
/// the result is `digests;identifier`, otherwise
/// `source_name;digests;identifier`.
///
/// # Examples
/// ```
/// use seqhasher_digest::compose_header;
///
/// let digests = vec!["aaaa".to_string(), "bbbb".to_string()];
/// assert_eq!(
///     compose_header("sample.fasta", &digests, "seq1", false),
///     "sample.fasta;aaaa;bbbb;seq1"
/// );
/// assert_eq!(compose_header("sample.fasta", &digests, "seq1", true), "aaaa;bbbb;seq1");
/// ```
pub fn compose_header(
    source_name: &str,
    digests: &[String],
    identifier: &str,
    omit_source_name: bool,
) -> String {
    let joined = digests.join(";");
    if omit_source_name {
        format!("{};{}", joined, identifier)
    } else {
        format!("{};{};{}", source_name, joined, identifier)
    }
}

/// Resolve the source name embedded in headers, once per run.
///
/// An override is used verbatim when present. Otherwise the stdin marker `-`
/// resolves to the literal `stdin`, and any other input designator is reduced
/// to its base file name (directory components stripped, compression suffixes
/// kept).
pub fn resolve_source_name(input_name: &str, name_override: Option<&str>) -> String {
    if let Some(name) = name_override {
        return name.to_string();
    }
    if input_name.is_empty() || input_name == "-" {
        return "stdin".to_string();
    }
    Path::new(input_name)
        .file_name()
        .map(|base| base.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_name.to_string())
}

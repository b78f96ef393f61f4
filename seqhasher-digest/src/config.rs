//! Immutable per-run configuration for the hashing pipeline.

use crate::hash::HashType;

/// Snapshot of the options a run was started with.
///
/// Constructed once before the pipeline runs and read-only afterwards; the
/// pipeline carries no other state between records. `hash_types` is already
/// validated by virtue of [`HashType`] being a closed enum, and `source_name`
/// is the fully resolved value from
/// [`resolve_source_name`](crate::header::resolve_source_name).
#[derive(Clone, Debug, Default)]
pub struct HasherConfig {
    /// Emit only composed header lines, without marker characters or bodies.
    pub headers_only: bool,
    /// Digests to compute, in the order their hex strings are concatenated.
    pub hash_types: Vec<HashType>,
    /// Drop the source-name field from headers.
    pub omit_source_name: bool,
    /// Skip upper-casing during normalization.
    pub case_sensitive: bool,
    /// Resolved source label: override text, `stdin`, or the base file name.
    pub source_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = HasherConfig::default();
        assert!(!config.headers_only);
        assert!(config.hash_types.is_empty());
        assert!(!config.omit_source_name);
        assert!(!config.case_sensitive);
        assert_eq!(config.source_name, "");
    }
}

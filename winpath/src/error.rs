use thiserror::Error;

use crate::Namespace;

/// Why a path could not be translated. These are precondition failures:
/// either the caller handed over a malformed path or the mount table is
/// misconfigured. None of them is retried, and no process is ever spawned
/// with an untranslated path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The input was not absolute in the source namespace's convention.
    #[error("path is not absolute in the source namespace: {path}")]
    NotAbsolute { path: String },

    /// No configured mount prefix covers the path.
    #[error("no mount rule matches path: {path}")]
    NoMountRule { path: String },

    /// More than one configured mount prefix covers the path. Overlapping
    /// mounts are a configuration bug, not something to resolve by a
    /// longest-prefix heuristic.
    #[error("multiple mount rules match path: {path}")]
    AmbiguousMount { path: String },

    /// The requested direction is not one this bridge performs.
    #[error("unsupported translation: {from:?} -> {to:?}")]
    UnsupportedPair { from: Namespace, to: Namespace },
}

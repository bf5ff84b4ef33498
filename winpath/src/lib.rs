//! Path translation between the filesystem namespaces this bridge spans:
//! the native Linux namespace, the Wine-emulated Windows namespace, and a
//! Windows namespace reached through WSL mount points.
//!
//! Translation is a textual rewrite over an already-canonical absolute
//! path. It does not touch the filesystem, does not normalize `.`/`..`
//! segments, and preserves trailing slashes verbatim. Feeding a path that
//! is already in the target namespace back through a translator is
//! undefined; callers must translate exactly once.

mod error;

pub use error::TranslateError;

use serde::Deserialize;
use serde::Serialize;

/// A distinct filesystem/path-convention domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Namespace {
    /// Native Linux paths (`/tmp/...`).
    Native,
    /// Windows paths as seen by a compiler running under Wine (`Z:/...`).
    WineEmulated,
    /// Windows paths backed by a WSL mount (`c:/...` for `/mnt/c/...`).
    WslMounted,
}

/// Maps a native path prefix to the drive letter a WSL-hosted Windows
/// process sees for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountRule {
    /// Native prefix, e.g. `/mnt/c`. No trailing slash.
    pub native_prefix: String,
    /// Target drive letter, e.g. `c`.
    pub drive: char,
}

impl MountRule {
    pub fn new(native_prefix: impl Into<String>, drive: char) -> Self {
        Self {
            native_prefix: native_prefix.into(),
            drive,
        }
    }

    /// True if `path` is this rule's prefix itself or sits below it.
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.native_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Translate `path` from `from` to `to`.
///
/// Only Native→WineEmulated and Native→WslMounted are meaningful in this
/// bridge; every other direction fails with
/// [`TranslateError::UnsupportedPair`]. `mounts` and `base` are consulted
/// for the WSL direction only.
pub fn translate(
    path: &str,
    from: Namespace,
    to: Namespace,
    mounts: &[MountRule],
    base: Option<&str>,
) -> Result<String, TranslateError> {
    match (from, to) {
        (Namespace::Native, Namespace::WineEmulated) => to_wine(path),
        (Namespace::Native, Namespace::WslMounted) => to_wsl(path, mounts, base),
        (from, to) => Err(TranslateError::UnsupportedPair { from, to }),
    }
}

/// Rewrite a native absolute path into the Wine view of the same file.
///
/// Wine exposes the entire native filesystem under a single drive, so the
/// transform is `/...` → `Z:/...` with the remainder untouched. No mount
/// table is involved.
pub fn to_wine(path: &str) -> Result<String, TranslateError> {
    if !path.starts_with('/') {
        return Err(TranslateError::NotAbsolute {
            path: path.to_string(),
        });
    }
    Ok(normalize_separators(&format!("Z:{path}")))
}

/// Rewrite a native absolute path into the Windows view of a WSL mount.
///
/// Exactly one mount rule must match: zero matches means the path lives
/// outside every configured mount ([`TranslateError::NoMountRule`]), more
/// than one means the mount table overlaps and is itself invalid
/// ([`TranslateError::AmbiguousMount`]).
///
/// When `base` is supplied and is a prefix of `path`, the base is
/// translated through the mount table and the remainder of `path` is
/// appended to it. For paths under the same mount this produces the same
/// string as the plain rewrite; it exists so callers may express the
/// request relative to a WSL-visible working-directory root. A `base`
/// that is not a prefix of `path` is ignored.
pub fn to_wsl(
    path: &str,
    mounts: &[MountRule],
    base: Option<&str>,
) -> Result<String, TranslateError> {
    if !path.starts_with('/') {
        return Err(TranslateError::NotAbsolute {
            path: path.to_string(),
        });
    }

    if let Some(base) = base
        && base != path
        && let Some(rest) = path.strip_prefix(base)
        && rest.starts_with('/')
    {
        let translated_base = rewrite_mount(base, mounts)?;
        return Ok(normalize_separators(&format!("{translated_base}{rest}")));
    }

    rewrite_mount(path, mounts).map(|p| normalize_separators(&p))
}

fn rewrite_mount(path: &str, mounts: &[MountRule]) -> Result<String, TranslateError> {
    let mut matched = mounts.iter().filter(|rule| rule.matches(path));
    let rule = matched.next().ok_or_else(|| TranslateError::NoMountRule {
        path: path.to_string(),
    })?;
    if matched.next().is_some() {
        return Err(TranslateError::AmbiguousMount {
            path: path.to_string(),
        });
    }
    let rest = &path[rule.native_prefix.len()..];
    Ok(format!("{}:{rest}", rule.drive))
}

/// Downstream compiler argument parsing accepts forward slashes uniformly,
/// so produced paths always use them, even for Windows-style targets.
fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

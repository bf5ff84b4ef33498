use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use winbridge_winpath::MountRule;

/// Description of one remote compiler installation, as supplied by the
/// external toolchain-metadata layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCompilerInfo {
    /// Native path of the compiler executable (or launch stub).
    pub exe: PathBuf,
    /// Remote target name, e.g. an MSVC triple.
    pub target: String,
    /// Install path in the remote namespace's convention.
    pub remote_path: String,
    /// cmake entry point in the remote namespace. Carried for the external
    /// cmake flow; the core never invokes it.
    pub cmake_path: String,
    /// Default WSL-visible working-directory root used when translating
    /// filenames without an explicit base.
    pub base_path: Option<String>,
}

/// Immutable bridge configuration, shared by reference across adapters.
/// Replaces any process-wide environment object: each adapter gets its own
/// copy at construction and nothing is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Native path of the Wine launch wrapper.
    pub wine_launcher: PathBuf,
    /// Native mount prefixes visible to the WSL-hosted toolchain.
    pub mounts: Vec<MountRule>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            wine_launcher: PathBuf::from("wine"),
            mounts: vec![MountRule::new("/mnt/c", 'c')],
        }
    }
}

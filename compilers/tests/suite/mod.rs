use std::path::PathBuf;

use winbridge_compilers::RemoteCompilerInfo;

mod exec;
mod paths;

pub(crate) fn fake_compiler_info() -> RemoteCompilerInfo {
    RemoteCompilerInfo {
        exe: PathBuf::from("/dev/null"),
        target: "foo".to_string(),
        remote_path: "bar".to_string(),
        cmake_path: "cmake".to_string(),
        base_path: Some("/".to_string()),
    }
}

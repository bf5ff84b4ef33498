#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use winbridge_compilers::BridgeConfig;
use winbridge_compilers::RemoteCompiler;
use winbridge_compilers::WineVcCompiler;
use winbridge_compilers::WslVcCompiler;

use super::fake_compiler_info;

#[test]
fn linux_to_wine_path() {
    let compiler = WineVcCompiler::new(fake_compiler_info(), BridgeConfig::default());
    assert_eq!(
        compiler.filename("/tmp/123456/output.s").unwrap(),
        "Z:/tmp/123456/output.s"
    );
}

#[test]
fn linux_to_windows_path() {
    let compiler = WslVcCompiler::new(fake_compiler_info(), BridgeConfig::default());
    assert_eq!(
        compiler
            .filename_with_base("/mnt/c/tmp/123456/output.s", Some("/mnt/c/tmp"))
            .unwrap(),
        "c:/tmp/123456/output.s"
    );
}

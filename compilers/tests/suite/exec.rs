#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;
use winbridge_compilers::BridgeConfig;
use winbridge_compilers::ExecutionResult;
use winbridge_compilers::OutputLine;
use winbridge_compilers::RemoteCompiler;
use winbridge_compilers::WineVcCompiler;
use winbridge_compilers::WslVcCompiler;
use winbridge_exec::running_under_wsl;

use super::fake_compiler_info;

/// Runs `pwd` through the WSL bridge with a working path under `/mnt/c`
/// and checks that the remote process genuinely started in the translated
/// directory. Only meaningful on a WSL host; self-gates elsewhere.
#[tokio::test]
async fn wsl_compiler_can_set_working_directory() {
    if !running_under_wsl() {
        return;
    }

    let compiler = WslVcCompiler::new(fake_compiler_info(), BridgeConfig::default());
    let result = compiler
        .run_compiler(
            Path::new("pwd"),
            &[],
            "/mnt/c/this-should-be-run-in-mnt-c",
            HashMap::new(),
            CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        ExecutionResult {
            code: 0,
            ok_to_cache: true,
            input_filename: "c:/this-should-be-run-in-mnt-c".to_string(),
            stdout: vec![OutputLine::new("/mnt/c")],
            stderr: vec![],
        }
    );
}

/// Two invocations against the same adapter instance with different
/// working directories must not leak state into each other.
#[tokio::test]
async fn concurrent_invocations_do_not_interfere() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let input_a = dir_a.path().join("a.cpp").display().to_string();
    let input_b = dir_b.path().join("b.cpp").display().to_string();

    let config = BridgeConfig {
        // Stand-in launcher that prints its argv.
        wine_launcher: PathBuf::from("echo"),
        ..BridgeConfig::default()
    };
    let compiler = WineVcCompiler::new(fake_compiler_info(), config);

    let args_a = ["a.cpp".to_string()];
    let args_b = ["b.cpp".to_string()];
    let (result_a, result_b) = tokio::join!(
        compiler.run_compiler(
            Path::new("cl.exe"),
            &args_a,
            &input_a,
            HashMap::new(),
            CancellationToken::new(),
        ),
        compiler.run_compiler(
            Path::new("cl.exe"),
            &args_b,
            &input_b,
            HashMap::new(),
            CancellationToken::new(),
        ),
    );

    let result_a = result_a.unwrap();
    let result_b = result_b.unwrap();
    assert_eq!(result_a.input_filename, format!("Z:{input_a}"));
    assert_eq!(result_b.input_filename, format!("Z:{input_b}"));
    assert_eq!(result_a.stdout, vec![OutputLine::new("cl.exe a.cpp")]);
    assert_eq!(result_b.stdout, vec![OutputLine::new("cl.exe b.cpp")]);
}

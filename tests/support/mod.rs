use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub fn mock_albums_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/mocks/albums.json")
}

/// Run the albumrack binary with the given arguments and piped stdin.
///
/// When `albums_path` is set, the shelf is injected through the environment
/// so the test does not depend on the working directory.
pub fn run_cli(args: &[&str], stdin_data: &str, albums_path: Option<&Path>) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_albumrack"));
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(path) = albums_path {
        cmd.env("ALBUMRACK_ALBUMS", path);
    }

    let mut child = cmd.spawn().context("spawning albumrack")?;
    child
        .stdin
        .as_mut()
        .context("stdin not piped")?
        .write_all(stdin_data.as_bytes())
        .context("writing stdin")?;
    child.wait_with_output().context("waiting for albumrack")
}

/// Like [`run_cli`] but fails the calling test when the binary exits nonzero.
pub fn run_cli_ok(args: &[&str], stdin_data: &str, albums_path: Option<&Path>) -> Result<Output> {
    let output = run_cli(args, stdin_data, albums_path)?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "albumrack failed: status {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

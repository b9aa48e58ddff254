//! # Command Execution Module / 命令执行模块
//!
//! Helpers for turning a configured command line into a program plus arguments,
//! and for running a child process while capturing everything it prints.
//!
//! 把配置的命令行拆分为程序与参数，并在运行子进程时捕获其全部输出。

use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::{Result, SetupError};

/// Expands `~` and environment variables in `command`, then splits it with shell
/// quoting rules.
///
/// # Returns
/// The program and its leading arguments.
///
/// 展开 `command` 中的 `~` 与环境变量，然后按 shell 引号规则拆分。
pub fn parse_command_line(command: &str) -> Result<(String, Vec<String>)> {
    let expanded = shellexpand::full(command)
        .map_err(|e| SetupError::Engine(format!("failed to expand command '{command}': {e}")))?
        .to_string();

    let mut parts = shlex::split(&expanded)
        .ok_or_else(|| SetupError::Engine(format!("failed to parse command '{expanded}'")))?
        .into_iter();

    let program = parts
        .next()
        .ok_or_else(|| SetupError::Engine("empty command after parsing".to_string()))?;

    Ok((program, parts.collect()))
}

/// Spawns a command and captures its stdout and stderr.
/// Both streams are read concurrently, line by line, into one string.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令，捕获其 stdout 和 stderr。两个流被并发逐行读取并合并到一个字符串中。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<ExitStatus>, String) {
    let mut child = match cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return (Err(e), String::new()),
    };

    let output = Arc::new(Mutex::new(String::new()));

    let mut readers = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        readers.push(tokio::spawn(collect_lines(stdout, Arc::clone(&output))));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(tokio::spawn(collect_lines(stderr, Arc::clone(&output))));
    }

    let status = child.wait().await;

    // Drain both pipes before handing the output back.
    for reader in readers {
        if let Err(e) = reader.await {
            warn!("failed to join output reader: {e}");
        }
    }

    let captured = output.lock().await.clone();
    (status, captured)
}

/// Appends every line of `stream` to `sink`. Bytes that are not valid UTF-8 are
/// replaced rather than ending the read, so later lines are never lost.
async fn collect_lines<R>(stream: R, sink: Arc<Mutex<String>>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let mut sink = sink.lock().await;
                sink.push_str(line.trim_end_matches(['\n', '\r']));
                sink.push('\n');
            }
            Err(e) => {
                warn!("failed to read child output: {e}");
                break;
            }
        }
    }
}

//! Process runner backed by `tokio::process`

use crate::error::{PipInstallError, PipInstallResult};
use crate::process::{error_output, Execution, ProcessRunner};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::debug;

/// Runs a fixed program, streaming its output to the log
#[derive(Debug, Clone)]
pub struct TokioProcessRunner {
    program: String,
}

impl TokioProcessRunner {
    /// Create a runner for `program` (resolved through `PATH` of the child env)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn display_command(&self, execution: &Execution) -> String {
        let mut command = self.program.clone();
        for arg in &execution.args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn execute(&self, execution: &Execution) -> PipInstallResult<String> {
        let command = self.display_command(execution);
        debug!("Executing: {}", command);

        let mut cmd = Command::new(&self.program);
        cmd.args(&execution.args)
            .env_clear()
            .envs(execution.env.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &execution.dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| PipInstallError::command_failed(&command, e))?;

        let lines = stream_child_output(&mut child).await;

        let status = child
            .wait()
            .await
            .map_err(|e| PipInstallError::command_failed(&command, e))?;

        if status.success() {
            Ok(lines.join("\n"))
        } else {
            Err(PipInstallError::ProcessExit {
                command: self.program.clone(),
                code: status.code(),
                output: error_output(&lines),
            })
        }
    }

    fn program(&self) -> &str {
        &self.program
    }
}

/// Stream stdout+stderr from a child process into the log.
///
/// Returns all collected output lines, interleaved in arrival order.
async fn stream_child_output(child: &mut Child) -> Vec<String> {
    let mut all_output = Vec::new();

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        return all_output;
    };

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let mut stdout_done = false;
    let mut stderr_done = false;

    while !stdout_done || !stderr_done {
        tokio::select! {
            line = stdout_reader.next_line(), if !stdout_done => {
                match line {
                    Ok(Some(line)) => {
                        debug!("    {}", line);
                        all_output.push(line);
                    }
                    _ => stdout_done = true,
                }
            }
            line = stderr_reader.next_line(), if !stderr_done => {
                match line {
                    Ok(Some(line)) => {
                        debug!("    {}", line);
                        all_output.push(line);
                    }
                    _ => stderr_done = true,
                }
            }
        }
    }

    all_output
}

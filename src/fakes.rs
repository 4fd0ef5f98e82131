//! Test doubles for the process and checksum capabilities

use crate::checksum::ContentFingerprinter;
use crate::error::{PipInstallError, PipInstallResult};
use crate::process::{Execution, ProcessRunner};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

type RunnerStub = Box<dyn Fn(&Execution) -> PipInstallResult<String> + Send + Sync>;

/// Records every execution and answers from a stub
pub struct FakeRunner {
    program: String,
    stub: RunnerStub,
    received: Mutex<Vec<Execution>>,
}

impl FakeRunner {
    pub fn new(program: &str) -> Self {
        Self::with_stub(program, |_| Ok(String::new()))
    }

    /// Succeed with the given combined output
    pub fn returning(program: &str, output: &str) -> Self {
        let output = output.to_string();
        Self::with_stub(program, move |_| Ok(output.clone()))
    }

    /// Fail as a non-zero exit with the given output
    pub fn failing(program: &str, code: i32, output: &str) -> Self {
        let name = program.to_string();
        let output = output.to_string();
        Self::with_stub(program, move |_| {
            Err(PipInstallError::ProcessExit {
                command: name.clone(),
                code: Some(code),
                output: output.clone(),
            })
        })
    }

    pub fn with_stub(
        program: &str,
        stub: impl Fn(&Execution) -> PipInstallResult<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            program: program.to_string(),
            stub: Box::new(stub),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// The most recent execution received
    pub fn last_execution(&self) -> Option<Execution> {
        self.received.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn execute(&self, execution: &Execution) -> PipInstallResult<String> {
        self.received.lock().unwrap().push(execution.clone());
        (self.stub)(execution)
    }

    fn program(&self) -> &str {
        &self.program
    }
}

/// Records the paths it is asked to sum and returns a canned result
pub struct FakeSummer {
    checksum: String,
    error: Option<String>,
    received: Mutex<Vec<Vec<PathBuf>>>,
}

impl FakeSummer {
    pub fn returning(checksum: &str) -> Self {
        Self {
            checksum: checksum.to_string(),
            error: None,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Fail with `reason`, reporting `checksum` as the placeholder value
    pub fn failing(checksum: &str, reason: &str) -> Self {
        Self {
            checksum: checksum.to_string(),
            error: Some(reason.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn last_paths(&self) -> Option<Vec<PathBuf>> {
        self.received.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContentFingerprinter for FakeSummer {
    async fn sum(&self, paths: &[PathBuf]) -> PipInstallResult<String> {
        self.received.lock().unwrap().push(paths.to_vec());
        match &self.error {
            Some(reason) => Err(PipInstallError::checksum(&self.checksum, reason)),
            None => Ok(self.checksum.clone()),
        }
    }
}

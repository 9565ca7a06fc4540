//! The launch capability: hand a URI (or a helper program) to the OS

use crate::config::Opener;
use crate::error::LaunchError;
use crate::launch::pure::opener_command;

use std::path::Path;
use std::process::Command;

pub trait Launcher {
    /// Open a storefront launch URI.
    fn launch(&self, uri: &str) -> Result<(), LaunchError>;

    /// Run a helper program to completion in `cwd`.
    fn run(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<(), LaunchError> {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(cwd);
        run_to_completion(cmd)
    }
}

fn run_to_completion(mut cmd: Command) -> Result<(), LaunchError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    log::debug!("running {:?}", cmd);

    let status = cmd.status().map_err(|source| LaunchError::Spawn {
        program: program.clone(),
        source,
    })?;
    if !status.success() {
        return Err(LaunchError::ExitStatus { program, status });
    }
    Ok(())
}

/// Launches through `start`, `open` or `xdg-open`.
pub struct SystemLauncher {
    opener: Opener,
}

impl SystemLauncher {
    pub fn new(opener: Opener) -> Self {
        Self { opener }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, uri: &str) -> Result<(), LaunchError> {
        log::info!("opening {uri}");
        run_to_completion(opener_command(self.opener, uri))
    }
}

/// Records URIs and helper runs instead of executing them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingLauncher {
    pub uris: std::cell::RefCell<Vec<String>>,
    pub runs: std::cell::RefCell<Vec<(std::path::PathBuf, Vec<String>, std::path::PathBuf)>>,
    pub fail_runs: bool,
}

#[cfg(test)]
impl Launcher for RecordingLauncher {
    fn launch(&self, uri: &str) -> Result<(), LaunchError> {
        self.uris.borrow_mut().push(uri.to_string());
        Ok(())
    }

    fn run(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<(), LaunchError> {
        self.runs.borrow_mut().push((
            program.to_path_buf(),
            args.iter().map(|a| a.to_string()).collect(),
            cwd.to_path_buf(),
        ));
        if self.fail_runs {
            return Err(LaunchError::Spawn {
                program: program.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted failure"),
            });
        }
        Ok(())
    }
}

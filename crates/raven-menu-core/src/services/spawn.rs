use std::process::{Command, Stdio};
use tracing::{debug, error};

use crate::error::{MenuError, Result};

/// Process-spawn service
pub trait Spawner {
    fn spawn(&mut self, command: &str) -> Result<()>;
}

/// Runs commands through `sh -c`, detached from the menu's stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellSpawner;

impl Spawner for ShellSpawner {
    fn spawn(&mut self, command: &str) -> Result<()> {
        debug!("Spawning detached: {}", command);

        let result = Command::new("sh")
            .args(["-c", command])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_) => {
                debug!("Successfully spawned: {}", command);
                Ok(())
            }
            Err(e) => {
                error!("Failed to spawn '{}': {}", command, e);
                Err(MenuError::Spawn {
                    command: command.to_string(),
                    source: e,
                })
            }
        }
    }
}

/// Records commands instead of running them
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingSpawner {
    pub spawned: Vec<String>,
}

#[cfg(test)]
impl Spawner for RecordingSpawner {
    fn spawn(&mut self, command: &str) -> Result<()> {
        self.spawned.push(command.to_string());
        Ok(())
    }
}

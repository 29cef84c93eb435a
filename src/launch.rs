//! External process launch
//!
//! Launching is fire-and-forget: the tapped entry's exec command is handed
//! to the configured launch script in a backgrounded shell. By the time
//! this runs the event loop has already been told to stop, so the launcher
//! gets out of the way immediately. The spawned process's lifetime is not
//! tracked. Spawn failure is fatal - without it the launcher cannot fulfil
//! its sole purpose.

use std::process::Command;

use anyhow::Context;

pub fn spawn_detached(script: &str, exec: &str) -> anyhow::Result<()> {
    let shell_cmd = format!("{} {} &", script, exec);
    tracing::info!(command = %shell_cmd, "launching");
    Command::new("sh")
        .arg("-c")
        .arg(&shell_cmd)
        .spawn()
        .with_context(|| format!("failed to spawn '{}'", shell_cmd))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_detached_returns_immediately() {
        // `sleep` would block for a second if the spawn waited on it
        let started = std::time::Instant::now();
        spawn_detached("sleep", "1").unwrap();
        assert!(started.elapsed() < std::time::Duration::from_millis(500));
    }
}

use super::{Dispatcher, ExecutionResult};

impl Dispatcher {
    pub(super) fn open_app(&self, app: &str) -> ExecutionResult {
        let Some(launch_command) = self.tables.application(app) else {
            return ExecutionResult::failed(format!("{app} is not a registered application"));
        };

        match self.platform.launch(launch_command) {
            Ok(()) => ExecutionResult::ok(format!("Opening {app}")),
            Err(error) => ExecutionResult::failed(format!("Failed to open {app}: {error}")),
        }
    }

    /// Terminates every running process whose name contains `app`,
    /// ignoring case. The current process is never a candidate.
    pub(super) fn close_app(&self, app: &str) -> ExecutionResult {
        let needle = app.trim().to_lowercase();
        if needle.is_empty() {
            return ExecutionResult::failed("No application name given");
        }

        let processes = match self.platform.list_processes() {
            Ok(processes) => processes,
            Err(error) => {
                return ExecutionResult::failed(format!("Failed to close {app}: {error}"));
            }
        };

        let own_pid = std::process::id();
        let candidates: Vec<_> = processes
            .iter()
            .filter(|process| process.pid != own_pid)
            .filter(|process| process.name.to_lowercase().contains(&needle))
            .collect();
        if candidates.is_empty() {
            return ExecutionResult::failed(format!("{app} is not running"));
        }

        let mut closed = 0usize;
        for process in candidates {
            match self.platform.terminate_process(process.pid) {
                Ok(()) => closed += 1,
                Err(error) => tracing::warn!(
                    pid = process.pid,
                    name = %process.name,
                    "failed to terminate process: {error}"
                ),
            }
        }

        if closed == 0 {
            ExecutionResult::failed(format!("Failed to close {app}"))
        } else {
            tracing::debug!(app, closed, "terminated processes");
            ExecutionResult::ok(format!("Closed {app}"))
        }
    }
}

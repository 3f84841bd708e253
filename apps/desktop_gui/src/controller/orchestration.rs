//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchFailure {
    QueueFull,
    /// The worker is gone; nothing sent from now on will be handled.
    Disconnected,
}

#[derive(Debug, Clone)]
pub struct DispatchError {
    pub failure: DispatchFailure,
    pub error: UiError,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(DispatchError {
            failure: DispatchFailure::QueueFull,
            error: UiError::from_message(
                UiErrorContext::General,
                "UI command queue is full; please retry",
            ),
        }),
        Err(TrySendError::Disconnected(_)) => Err(DispatchError {
            failure: DispatchFailure::Disconnected,
            error: UiError::from_message(
                UiErrorContext::General,
                "Backend worker disconnected; theme changes will not be saved",
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;
    use crossbeam_channel::bounded;

    #[test]
    fn queues_commands_while_worker_is_alive() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::ToggleTheme).expect("queued");
        assert_eq!(rx.try_recv(), Ok(BackendCommand::ToggleTheme));
    }

    #[test]
    fn full_queue_is_reported() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::LoadTheme).expect("queued");
        let err = dispatch_backend_command(&tx, BackendCommand::ToggleTheme).unwrap_err();
        assert_eq!(err.failure, DispatchFailure::QueueFull);
        assert_eq!(err.error.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn dropped_worker_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, BackendCommand::LoadTheme).unwrap_err();
        assert_eq!(err.failure, DispatchFailure::Disconnected);
        assert!(err.error.message().contains("disconnected"));
        assert_eq!(err.error.category(), UiErrorCategory::Transport);
    }
}

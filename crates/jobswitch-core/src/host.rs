//! Chat-side host seams: the command table and the user-visible channel.

use thiserror::Error;

/// Errors reported by host command registration.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host refused to add the command.
    #[error("host refused command {command}: {reason}")]
    CommandRejected {
        /// The command string.
        command: String,
        /// Reason given by the host.
        reason: String,
    },
}

/// Metadata attached to a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// One-line description shown by the host's help command.
    pub help_message: String,
    /// Whether the host lists the command in its help output.
    pub show_in_help: bool,
}

/// The host's chat-command table.
///
/// Invocations of commands added here are routed by the host to
/// the plugin's command handler.
pub trait CommandSink: Send + Sync {
    /// Whether any plugin currently owns `command`.
    fn contains(&self, command: &str) -> bool;

    /// Add a command.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host rejects the command.
    fn add_handler(&self, command: &str, info: CommandInfo) -> Result<(), HostError>;

    /// Remove a command, returning whether it was present.
    fn remove_handler(&self, command: &str) -> bool;
}

/// The user-visible chat channel.
pub trait Notifier: Send + Sync {
    /// Print an informational line.
    fn print(&self, message: &str);

    /// Print an error line.
    fn print_error(&self, message: &str);
}

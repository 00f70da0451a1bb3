//! Undoable commands applied to a target value

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("command failed: {0}")]
    Failed(String),
    #[error("nothing to undo")]
    NothingToUndo,
}

/// An operation on `T` that can be reverted
pub trait Command<T: ?Sized>: Send + Sync {
    fn execute(&mut self, target: &mut T) -> Result<(), CommandError>;

    fn undo(&mut self, target: &mut T) -> Result<(), CommandError>;

    fn name(&self) -> &str {
        "Command"
    }
}

/// Executed commands, most recent last
pub struct CommandHistory<T: ?Sized> {
    done: Vec<Box<dyn Command<T>>>,
}

impl<T: ?Sized> CommandHistory<T> {
    pub fn new() -> Self {
        Self { done: Vec::new() }
    }

    /// Execute `command` against `target` and remember it for undo.
    ///
    /// A command that fails is not recorded.
    pub fn run<C>(&mut self, mut command: C, target: &mut T) -> Result<(), CommandError>
    where
        C: Command<T> + 'static,
    {
        command.execute(target)?;
        tracing::debug!(command = command.name(), depth = self.done.len() + 1, "Command executed");
        self.done.push(Box::new(command));
        Ok(())
    }

    /// Undo the most recent command.
    ///
    /// If the undo itself fails the command stays in the history.
    pub fn undo_last(&mut self, target: &mut T) -> Result<(), CommandError> {
        let mut command = self.done.pop().ok_or(CommandError::NothingToUndo)?;
        if let Err(err) = command.undo(target) {
            tracing::warn!(command = command.name(), error = %err, "Undo failed");
            self.done.push(command);
            return Err(err);
        }
        tracing::debug!(command = command.name(), depth = self.done.len(), "Command undone");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}

impl<T: ?Sized> Default for CommandHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for CommandHistory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.done.iter().map(|c| c.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Append(&'static str);

    impl Command<String> for Append {
        fn execute(&mut self, target: &mut String) -> Result<(), CommandError> {
            target.push_str(self.0);
            Ok(())
        }

        fn undo(&mut self, target: &mut String) -> Result<(), CommandError> {
            let len = target.len() - self.0.len();
            target.truncate(len);
            Ok(())
        }

        fn name(&self) -> &str {
            "Append"
        }
    }

    struct Withdraw(u64);

    impl Command<u64> for Withdraw {
        fn execute(&mut self, balance: &mut u64) -> Result<(), CommandError> {
            *balance = balance
                .checked_sub(self.0)
                .ok_or_else(|| CommandError::Failed(format!("insufficient funds for {}", self.0)))?;
            Ok(())
        }

        fn undo(&mut self, balance: &mut u64) -> Result<(), CommandError> {
            *balance += self.0;
            Ok(())
        }
    }

    #[test]
    fn test_run_and_undo_in_reverse_order() {
        let mut history = CommandHistory::new();
        let mut text = String::new();

        history.run(Append("hello"), &mut text).unwrap();
        history.run(Append(" world"), &mut text).unwrap();
        assert_eq!(text, "hello world");
        assert_eq!(history.len(), 2);

        history.undo_last(&mut text).unwrap();
        assert_eq!(text, "hello");
        history.undo_last(&mut text).unwrap();
        assert_eq!(text, "");
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = CommandHistory::<String>::new();
        let mut text = String::new();
        assert_eq!(history.undo_last(&mut text), Err(CommandError::NothingToUndo));
    }

    #[test]
    fn test_failed_command_is_not_recorded() {
        let mut history = CommandHistory::new();
        let mut balance = 10_u64;

        history.run(Withdraw(4), &mut balance).unwrap();
        let result = history.run(Withdraw(100), &mut balance);

        assert!(matches!(result, Err(CommandError::Failed(_))));
        assert_eq!(balance, 6);
        assert_eq!(history.len(), 1);

        history.undo_last(&mut balance).unwrap();
        assert_eq!(balance, 10);
    }

    #[test]
    fn test_debug_lists_command_names() {
        let mut history = CommandHistory::new();
        let mut text = String::new();
        history.run(Append("a"), &mut text).unwrap();
        assert_eq!(format!("{history:?}"), r#"["Append"]"#);
    }
}

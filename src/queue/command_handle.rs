use std::fmt;

use crate::Command;

/// The result of popping a [`CommandQueue`](crate::CommandQueue)
///
/// A handle either carries the command that was at the front of the queue, or
/// is empty because the queue had nothing to give. Executing an empty handle
/// does nothing.
pub struct CommandHandle<R: ?Sized, O = ()> {
    command: Option<Box<dyn Command<R, O>>>,
}

impl<R: ?Sized, O> CommandHandle<R, O> {
    /// Create a handle that carries no command
    pub fn empty() -> Self {
        Self { command: None }
    }

    /// Whether the handle carries a command
    pub fn is_present(&self) -> bool {
        self.command.is_some()
    }

    /// Whether the handle is empty
    pub fn is_empty(&self) -> bool {
        self.command.is_none()
    }

    /// Execute the command against `receiver`
    ///
    /// Returns the command's output, or `None` without touching the receiver
    /// if the handle is empty.
    pub fn execute(self, receiver: &mut R) -> Option<O> {
        self.command.map(|command| command.execute(receiver))
    }

    /// Take the command out of the handle
    pub fn into_command(self) -> Option<Box<dyn Command<R, O>>> {
        self.command
    }
}

impl<R: ?Sized, O> Default for CommandHandle<R, O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: ?Sized, O> From<Box<dyn Command<R, O>>> for CommandHandle<R, O> {
    fn from(command: Box<dyn Command<R, O>>) -> Self {
        Self {
            command: Some(command),
        }
    }
}

impl<R: ?Sized, O> From<CommandHandle<R, O>> for Option<Box<dyn Command<R, O>>> {
    fn from(handle: CommandHandle<R, O>) -> Self {
        handle.command
    }
}

impl<R: ?Sized, O> fmt::Debug for CommandHandle<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHandle")
            .field("present", &self.is_present())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_handle_does_nothing() {
        let mut counter = 0;
        let handle = CommandHandle::<i32>::empty();

        assert!(!handle.is_present());
        assert!(handle.execute(&mut counter).is_none());
        assert_eq!(counter, 0);
    }

    #[test]
    fn present_handle_executes_once() {
        let mut counter = 0;
        let command: Box<dyn Command<i32, i32>> = Box::new(|counter: &mut i32| {
            *counter += 1;
            *counter
        });
        let handle = CommandHandle::from(command);

        assert!(handle.is_present());
        assert_eq!(handle.execute(&mut counter), Some(1));
        assert_eq!(counter, 1);
    }

    #[test]
    fn handle_converts_into_optional_command() {
        let mut counter = 0;
        let command: Box<dyn Command<i32>> = Box::new(|counter: &mut i32| *counter += 5);

        let present: Option<Box<dyn Command<i32>>> = CommandHandle::from(command).into();
        let empty: Option<Box<dyn Command<i32>>> = CommandHandle::<i32>::empty().into();

        assert!(empty.is_none());
        present.unwrap().execute(&mut counter);
        assert_eq!(counter, 5);
    }

    #[test]
    fn debug_shows_presence() {
        let handle = CommandHandle::<i32>::default();

        assert_eq!(format!("{handle:?}"), "CommandHandle { present: false }");
    }
}

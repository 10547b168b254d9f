use std::{collections::VecDeque, fmt};

use crate::{BoundCommand, Command, CommandHandle, Method};

/// A first-in first-out queue of deferred commands
///
/// Commands are pushed with the operation they will call and the arguments
/// they will call it with. A consumer later pops them, in the order they were
/// pushed, and executes them against a receiver of type `R`. Every command in
/// a queue returns the same output type `O`.
///
/// # Example
///
/// ```rust
/// use deferred::CommandQueue;
///
/// struct Counter {
///     total: i64,
/// }
///
/// impl Counter {
///     fn add(&mut self, amount: i64) {
///         self.total += amount;
///     }
/// }
///
/// let mut queue = CommandQueue::new();
/// queue.push(Counter::add, (2,));
/// queue.push(Counter::add, (40,));
///
/// let mut counter = Counter { total: 0 };
/// queue.execute_all(&mut counter);
///
/// assert_eq!(counter.total, 42);
/// ```
pub struct CommandQueue<R: ?Sized, O = ()> {
    commands: VecDeque<Box<dyn Command<R, O>>>,
}

impl<R: ?Sized, O> CommandQueue<R, O> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            commands: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` commands before it
    /// reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: VecDeque::with_capacity(capacity),
        }
    }

    /// Queue a call to `method` with `arguments`
    ///
    /// `arguments` is a tuple that must match the parameters `method` takes
    /// after the receiver, e.g. `queue.push(Counter::add, (2,))`.
    pub fn push<M, Args>(&mut self, method: M, arguments: Args)
    where
        M: Method<R, Args, Output = O> + 'static,
        Args: 'static,
    {
        self.push_command(BoundCommand::new(method, arguments));
    }

    /// Queue an already built command, such as a closure
    pub fn push_command<C>(&mut self, command: C)
    where
        C: Command<R, O> + 'static,
    {
        self.commands.push_back(Box::new(command));
        tracing::trace!(pending = self.commands.len(), "pushed command");
    }

    /// Take the oldest command from the queue
    ///
    /// The returned handle is empty if the queue was empty, in which case the
    /// queue is left unchanged.
    pub fn pop(&mut self) -> CommandHandle<R, O> {
        match self.commands.pop_front() {
            Some(command) => {
                tracing::trace!(pending = self.commands.len(), "popped command");
                CommandHandle::from(command)
            }
            None => CommandHandle::empty(),
        }
    }

    /// The number of commands waiting to be popped
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether there are no commands waiting
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every pending command without executing it
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl<R: ?Sized> CommandQueue<R> {
    /// Pop and execute commands until the queue is empty
    ///
    /// Returns the number of commands that ran. Queues whose commands return
    /// a `Result` are drained with `try_execute_all` instead.
    pub fn execute_all(&mut self, receiver: &mut R) -> usize {
        let mut executed = 0;

        loop {
            let handle = self.pop();
            if handle.is_empty() {
                break;
            }

            handle.execute(receiver);
            executed += 1;
        }

        tracing::debug!(executed, "drained command queue");
        executed
    }
}

impl<R: ?Sized, T, E> CommandQueue<R, Result<T, E>> {
    /// Pop and execute commands until the queue is empty or one fails
    ///
    /// The first error is returned as is. Commands behind the failing one stay
    /// in the queue.
    pub fn try_execute_all(&mut self, receiver: &mut R) -> Result<usize, E> {
        let mut executed = 0;

        while let Some(command) = self.pop().into_command() {
            if let Err(error) = command.execute(receiver) {
                tracing::debug!(
                    executed,
                    pending = self.commands.len(),
                    "command failed, stopping"
                );
                return Err(error);
            }

            executed += 1;
        }

        tracing::debug!(executed, "drained command queue");
        Ok(executed)
    }
}

impl<R: ?Sized, O> Default for CommandQueue<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized, O> fmt::Debug for CommandQueue<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandQueue")
            .field("pending", &self.commands.len())
            .finish()
    }
}

#![warn(missing_docs)]

//! deferred is a queue of method calls that run later
//!
//! You can use it to:
//! - Push a receiver method together with the arguments to call it with
//! - Push closures or your own command types alongside them
//! - Pop the commands in the order they were pushed
//! - Execute them against a receiver of your choosing
//!
//! # Example
//!
//! ```rust
//! use deferred::{CommandQueue, TextReceiver};
//!
//! let mut queue = CommandQueue::new();
//!
//! queue.push(TextReceiver::exec_long, (39,));
//! queue.push(TextReceiver::exec_literal, ("hello",));
//!
//! let mut receiver = TextReceiver::new(std::io::stdout());
//!
//! loop {
//!     let handle = queue.pop();
//!     if handle.is_empty() {
//!         break;
//!     }
//!
//!     if let Some(Err(error)) = handle.execute(&mut receiver) {
//!         eprintln!("{error}");
//!     }
//! }
//! ```

mod commands;
mod queue;
mod receiver;

pub use commands::BoundCommand;
pub use commands::Command;
pub use commands::Method;

pub use queue::CommandHandle;
pub use queue::CommandQueue;

pub use receiver::ReceiverError;
pub use receiver::TextCommandQueue;
pub use receiver::TextOperation;
pub use receiver::TextReceiver;

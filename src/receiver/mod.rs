mod receiver_error;
mod text_operation;
mod text_receiver;

pub use receiver_error::ReceiverError;
pub use text_operation::TextOperation;
pub use text_receiver::TextReceiver;

/// A queue of commands for a [`TextReceiver`] writing to `W`
pub type TextCommandQueue<W> = crate::CommandQueue<TextReceiver<W>, Result<(), ReceiverError>>;

use std::io::Write;

use super::{ReceiverError, TextReceiver};
use crate::Command;

/// The operations a [`TextReceiver`] offers, as a closed set
///
/// Queueing a `TextOperation` is equivalent to pushing the matching method
/// path with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOperation {
    /// [`TextReceiver::exec_long`]
    Long(i64),
    /// [`TextReceiver::exec_string`]
    String(String),
    /// [`TextReceiver::exec_literal`]
    Literal(&'static str),
    /// [`TextReceiver::exec_multiple`]
    Multiple {
        /// Reported as the long value
        number: i64,
        /// Reported as the string value
        text: String,
        /// Reported as the owned string value
        owned_text: Box<str>,
        /// Reported as the string literal
        literal: &'static str,
    },
}

impl<W: Write> Command<TextReceiver<W>, Result<(), ReceiverError>> for TextOperation {
    fn execute(self: Box<Self>, receiver: &mut TextReceiver<W>) -> Result<(), ReceiverError> {
        match *self {
            TextOperation::Long(value) => receiver.exec_long(value),
            TextOperation::String(value) => receiver.exec_string(value),
            TextOperation::Literal(value) => receiver.exec_literal(value),
            TextOperation::Multiple {
                number,
                text,
                owned_text,
                literal,
            } => receiver.exec_multiple(number, text, owned_text, literal),
        }
    }
}

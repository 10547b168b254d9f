mod bound_command;
mod command;
mod method;

pub use bound_command::BoundCommand;
pub use command::Command;
pub use method::Method;

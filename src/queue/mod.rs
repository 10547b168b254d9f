mod command_handle;
mod command_queue;

pub use command_handle::CommandHandle;
pub use command_queue::CommandQueue;

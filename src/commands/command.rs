/// A deferred unit of work that runs against a receiver
///
/// A command is consumed by `execute`, so it can run at most once. Any
/// `FnOnce(&mut R) -> O` closure is a command.
pub trait Command<R: ?Sized, O = ()> {
    /// Run the command against `receiver`
    fn execute(self: Box<Self>, receiver: &mut R) -> O;
}

impl<R, O, F> Command<R, O> for F
where
    R: ?Sized,
    F: FnOnce(&mut R) -> O,
{
    fn execute(self: Box<Self>, receiver: &mut R) -> O {
        (*self)(receiver)
    }
}

use super::{Command, Method};

/// A receiver operation bundled with the arguments it will be called with
///
/// The arguments are moved in at construction and moved out again when the
/// command executes, so owned values such as `String` or `Box<str>` are
/// handed to the operation without copies.
pub struct BoundCommand<M, Args> {
    method: M,
    arguments: Args,
}

impl<M, Args> BoundCommand<M, Args> {
    /// Bind `arguments` to `method`
    pub fn new(method: M, arguments: Args) -> Self {
        Self { method, arguments }
    }
}

impl<R, O, M, Args> Command<R, O> for BoundCommand<M, Args>
where
    R: ?Sized,
    M: Method<R, Args, Output = O>,
{
    fn execute(self: Box<Self>, receiver: &mut R) -> O {
        let Self { method, arguments } = *self;
        method.invoke(receiver, arguments)
    }
}

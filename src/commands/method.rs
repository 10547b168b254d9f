/// A receiver operation that takes its arguments as a tuple
///
/// This is implemented for every function or closure whose first parameter is
/// `&mut R`, with up to eight further parameters. A method path such as
/// `Counter::add` can therefore be paired with an argument tuple, and a
/// mismatch between the two is a compile error rather than a runtime one.
pub trait Method<R: ?Sized, Args> {
    /// The value returned by the operation
    type Output;

    /// Call the operation on `receiver`, spreading `args` in order
    fn invoke(self, receiver: &mut R, args: Args) -> Self::Output;
}

macro_rules! impl_method {
    ($($argument:ident),*) => {
        impl<R, F, O, $($argument),*> Method<R, ($($argument,)*)> for F
        where
            R: ?Sized,
            F: FnOnce(&mut R, $($argument),*) -> O,
        {
            type Output = O;

            #[allow(non_snake_case)]
            fn invoke(self, receiver: &mut R, ($($argument,)*): ($($argument,)*)) -> O {
                self(receiver, $($argument),*)
            }
        }
    };
}

impl_method!();
impl_method!(A1);
impl_method!(A1, A2);
impl_method!(A1, A2, A3);
impl_method!(A1, A2, A3, A4);
impl_method!(A1, A2, A3, A4, A5);
impl_method!(A1, A2, A3, A4, A5, A6);
impl_method!(A1, A2, A3, A4, A5, A6, A7);
impl_method!(A1, A2, A3, A4, A5, A6, A7, A8);

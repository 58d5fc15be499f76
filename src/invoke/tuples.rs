//! `Invocable` implementations of [`Call`] for every supported arity.

use super::{Call, Invocable};

macro_rules! impl_call_for_arity {
    ($($argument_type:ident $argument:ident),*) => {
        impl<Function, Return, $($argument_type),*> Invocable<($($argument_type,)*)> for Call<Function>
        where
            Function: Fn($($argument_type),*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn invoke(&self, ($($argument,)*): ($($argument_type,)*)) -> Return {
                (self.0)($($argument),*)
            }
        }
    };
}

impl_call_for_arity!();
impl_call_for_arity!(A a);
impl_call_for_arity!(A a, B b);
impl_call_for_arity!(A a, B b, C c);
impl_call_for_arity!(A a, B b, C c, D d);
impl_call_for_arity!(A a, B b, C c, D d, E e);
impl_call_for_arity!(A a, B b, C c, D d, E e, F f);

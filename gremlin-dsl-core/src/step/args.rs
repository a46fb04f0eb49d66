use crate::traversal::GraphTraversal;
use std::fmt::Display;

/// Conversion of a chain call's arguments into pre-stringified step arguments.
///
/// Rust has no variadics, so a call takes one value that expands into the
/// argument list: `()` for none, a single string, a tuple of mixed
/// [`Display`] values, or any array, slice or `Vec` of them. Nested traversals
/// are rendered at the time of the call.
///
/// Arguments are inserted verbatim. Quoting string literals is up to the
/// caller: `has(("name", "'marko'"))` renders `has(name, 'marko')`.
pub trait IntoArgs {
    fn into_args(self) -> Vec<String>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<String> {
        Vec::new()
    }
}

impl IntoArgs for &str {
    fn into_args(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoArgs for String {
    fn into_args(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoArgs for &GraphTraversal {
    fn into_args(self) -> Vec<String> {
        vec![self.render()]
    }
}

impl IntoArgs for &mut GraphTraversal {
    fn into_args(self) -> Vec<String> {
        vec![self.render()]
    }
}

impl IntoArgs for GraphTraversal {
    fn into_args(self) -> Vec<String> {
        vec![self.render()]
    }
}

impl<T: Display, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<T: Display> IntoArgs for &[T] {
    fn into_args(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<T: Display> IntoArgs for Vec<T> {
    fn into_args(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

macro_rules! scalar_args {
    ($($ty:ty),+) => {
        $(
            impl IntoArgs for $ty {
                fn into_args(self) -> Vec<String> {
                    vec![self.to_string()]
                }
            }
        )+
    };
}

scalar_args!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, bool, char);

macro_rules! tuple_args {
    ($($name:ident),+) => {
        impl<$($name: Display),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<String> {
                let ($($name,)+) = self;
                vec![$($name.to_string()),+]
            }
        }
    };
}

tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
tuple_args!(A, B, C, D, E, F);

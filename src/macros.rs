//! Convenience macros for building combinators from converter lists.

/// Builds a [`Pipe`](crate::combinators::Pipe) from converter expressions,
/// boxing each stage.
///
/// ```rust,ignore
/// let username = pipe![cleanup_line(), require()];
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::combinators::Pipe::new()
    };
    ($($stage:expr),+ $(,)?) => {
        $crate::combinators::Pipe::from_stages(vec![
            $($crate::foundation::ConvertExt::boxed($stage)),+
        ])
    };
}

/// Builds a [`FirstMatch`](crate::combinators::FirstMatch) from converter
/// expressions, boxing each alternative.
#[macro_export]
macro_rules! first_match {
    () => {
        $crate::combinators::FirstMatch::new()
    };
    ($($alternative:expr),+ $(,)?) => {
        $crate::combinators::FirstMatch::from_alternatives(vec![
            $($crate::foundation::ConvertExt::boxed($alternative)),+
        ])
    };
}

/// Builds a [`Struct`](crate::combinators::Struct) from `key => converter`
/// pairs, boxing each field converter.
///
/// ```rust,ignore
/// let form = structure![
///     "name" => pipe![cleanup_line(), require()],
///     "age" => input_to_int(),
/// ];
/// ```
#[macro_export]
macro_rules! structure {
    () => {
        $crate::combinators::Struct::new(Vec::new())
    };
    ($($key:expr => $converter:expr),+ $(,)?) => {
        $crate::combinators::Struct::new(vec![
            $(($key.into(), $crate::foundation::ConvertExt::boxed($converter))),+
        ])
    };
}

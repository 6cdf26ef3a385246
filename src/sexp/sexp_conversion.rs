/// Breaks builtin Args into Result<tuple of component types, LangErr>,
/// assuming all component types implement TryFrom<Sexp>.
///
/// Example:
///   let (a, b) = break_args!(args => (Symbol, Sexp))?;
macro_rules! break_args {
    ($args:expr => ()) => {
        {
            let args: $crate::primitive::Args = $args;
            if args.is_empty() {
                Ok(())
            } else {
                err!(WrongArgumentCount {
                    given: args.len(),
                    expected: $crate::lang_err::ExpectedCount::Exactly(0),
                })
            }
        }
    };
    ($args:expr => ($($type:ident),+)) => {
        (|| {
            let args: $crate::primitive::Args = $args;
            let expected = [$(stringify!($type)),+].len();
            if args.len() != expected {
                return err!(WrongArgumentCount {
                    given: args.len(),
                    expected: $crate::lang_err::ExpectedCount::Exactly(expected),
                });
            }
            let mut iter = args.into_iter();
            Ok(($(
                match <$type as std::convert::TryFrom<$crate::sexp::Sexp>>::try_from(
                    iter.next().unwrap_or_default()
                ) {
                    Ok(val) => val,
                    Err(original) => {
                        return err!(InvalidArgument {
                            given: original.into(),
                            expected: std::borrow::Cow::Borrowed(
                                concat!("type ", stringify!($type))
                            ),
                        });
                    }
                },
            )+))
        })()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! list_inner {
    () => { $crate::sexp::Sexp::nil() };
    (($($sub:tt)*), $($tail:tt)*) => {
        $crate::sexp::Sexp::cons(
            $crate::list_inner!($($sub)*),
            $crate::list_inner!($($tail)*),
        )
    };
    ($elem:expr, $($tail:tt)*) => {
        $crate::sexp::Sexp::cons(
            <$crate::sexp::Sexp>::from($elem),
            $crate::list_inner!($($tail)*),
        )
    };
}

/// Returns the elements as a Sexp list.
///
/// Provided elements must implement Into<Sexp>.
/// Trailing commas currently must be used.
///
/// Example:
///   list!(a, b, (c, (d,),), e,)
#[macro_export]
macro_rules! list {
    ($($tail:tt)*) => {
        $crate::list_inner!($($tail)*)
    }
}


#[cfg(test)]
#[path = "./sexp_conversion_test.rs"]
mod sexp_conversion_test;

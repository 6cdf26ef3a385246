/// Implements owned and borrowed TryFrom<Sexp> for the payload of a Sexp
/// variant. On failure, the original Sexp is handed back.
macro_rules! impl_try_from {
    ($variant:ident => $to:ty) => {
        impl std::convert::TryFrom<$crate::sexp::Sexp> for $to {
            type Error = $crate::sexp::Sexp;

            fn try_from(value: $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::$variant(val) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }

        impl<'a> std::convert::TryFrom<&'a $crate::sexp::Sexp> for &'a $to {
            type Error = &'a $crate::sexp::Sexp;

            fn try_from(value: &'a $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::$variant(val) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
    };
}

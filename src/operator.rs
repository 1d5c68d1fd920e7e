//! Arithmetic operators lifted through `bind`.
//!
//! [`monad_binary_op!`](crate::monad_binary_op) derives a binary operator
//! for a variant from the payload's operator:
//!
//! ```text
//! lhs op rhs == bind(lhs, |x| bind(rhs, |y| pure(x op y)))
//! ```
//!
//! With the `operators` feature (on by default) `Maybe` and `List` get
//! `+ - * / %`, and `>>` is [`then`](crate::combinator::then). On `Maybe`
//! an absent operand makes the result absent; on `List` the operator is
//! applied to every pair of elements.
//!
//! # Examples
//!
//! ```rust
//! use monadic::{absent, list, maybe};
//!
//! assert_eq!(maybe(1) + maybe(2), maybe(3));
//! assert_eq!(maybe(0) + maybe(3) + absent(), absent());
//! assert_eq!(list![1, 2] * list![10, 100], list![10, 100, 20, 200]);
//! assert_eq!(maybe(0) >> maybe('x'), maybe('x'));
//! ```

/// Implements a `core::ops` binary operator for a variant, or defines a
/// named function performing it.
///
/// The variant must implement the monad contract and its payload the
/// operator, with `Output` equal to the payload type. Payloads are cloned
/// when the variant revisits them.
///
/// # Examples
///
/// ```rust
/// use monadic::{monad_binary_op, Identity};
///
/// monad_binary_op!(pub fn identity_add = Add for Identity);
///
/// assert_eq!(identity_add(Identity(2), Identity(3)), Identity(5));
/// ```
#[macro_export]
macro_rules! monad_binary_op {
    ($visibility:vis fn $name:ident = $operator:ident for $variant:ident) => {
        $crate::paste::paste! {
            #[allow(dead_code)]
            $visibility fn $name<T>(lhs: $variant<T>, rhs: $variant<T>) -> $variant<T>
            where
                T: ::core::ops::$operator<Output = T> + ::core::clone::Clone,
            {
                $crate::lift_n!(
                    <T as ::core::ops::$operator>::[<$operator:lower>],
                    lhs,
                    rhs
                )
            }
        }
    };
    ($operator:ident for $variant:ident) => {
        $crate::paste::paste! {
            impl<T> ::core::ops::$operator for $variant<T>
            where
                T: ::core::ops::$operator<Output = T> + ::core::clone::Clone,
            {
                type Output = Self;

                #[inline]
                fn [<$operator:lower>](self, rhs: Self) -> Self {
                    $crate::lift_n!(
                        <T as ::core::ops::$operator>::[<$operator:lower>],
                        self,
                        rhs
                    )
                }
            }
        }
    };
}

#[cfg(feature = "operators")]
mod instances {
    use core::ops::Shr;

    use crate::{List, Maybe};

    monad_binary_op!(Add for Maybe);
    monad_binary_op!(Sub for Maybe);
    monad_binary_op!(Mul for Maybe);
    monad_binary_op!(Div for Maybe);
    monad_binary_op!(Rem for Maybe);

    monad_binary_op!(Add for List);
    monad_binary_op!(Sub for List);
    monad_binary_op!(Mul for List);
    monad_binary_op!(Div for List);
    monad_binary_op!(Rem for List);

    impl<T, U> Shr<Maybe<U>> for Maybe<T> {
        type Output = Maybe<U>;

        #[inline]
        fn shr(self, next: Maybe<U>) -> Maybe<U> {
            self.then(next)
        }
    }

    impl<T, U: Clone> Shr<List<U>> for List<T> {
        type Output = List<U>;

        #[inline]
        fn shr(self, next: List<U>) -> List<U> {
            self.then(&next)
        }
    }
}

#[cfg(all(test, feature = "operators"))]
mod tests {
    use crate::{Identity, List, Maybe, absent, list, maybe};
    use rstest::rstest;

    // =========================================================================
    // Maybe
    // =========================================================================

    #[rstest]
    #[case(maybe(1), maybe(2), maybe(3))]
    #[case(absent(), maybe(2), absent())]
    #[case(maybe(1), absent(), absent())]
    #[case(absent(), absent(), absent())]
    fn add_on_maybe(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(left + right, expected);
    }

    #[rstest]
    fn chained_addition_with_absent_is_absent() {
        assert_eq!(maybe(0) + maybe(3) + absent(), absent());
    }

    #[rstest]
    fn arithmetic_on_maybe() {
        assert_eq!(maybe(7) - maybe(2), maybe(5));
        assert_eq!(maybe(7) * maybe(2), maybe(14));
        assert_eq!(maybe(7) / maybe(2), maybe(3));
        assert_eq!(maybe(7) % maybe(2), maybe(1));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Text(String);

    impl core::ops::Add for Text {
        type Output = Self;

        fn add(self, rhs: Self) -> Self {
            Self(self.0 + &rhs.0)
        }
    }

    fn text(value: &str) -> Text {
        Text(value.to_string())
    }

    #[rstest]
    fn add_on_maybe_with_owned_payload() {
        assert_eq!(maybe(text("ab")) + maybe(text("cd")), maybe(text("abcd")));
        assert_eq!(maybe(text("ab")) + absent(), absent());
    }

    #[rstest]
    fn add_on_list_with_owned_payload_clones_per_pair() {
        let result = list![text("a"), text("b")] + list![text("x"), text("y")];
        assert_eq!(
            result,
            list![text("ax"), text("ay"), text("bx"), text("by")]
        );
    }

    #[rstest]
    #[case(maybe(0), maybe(3), maybe(3))]
    #[case(absent(), maybe(3), absent())]
    #[case(maybe(3), absent(), absent())]
    fn shr_is_then(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(left >> right, expected);
    }

    // =========================================================================
    // List
    // =========================================================================

    #[rstest]
    fn add_on_list_is_pairwise_product() {
        assert_eq!(list![1, 2] + list![10, 20], list![11, 21, 12, 22]);
    }

    #[rstest]
    fn add_on_list_with_empty_is_empty() {
        assert!((list![1, 2] + List::new()).is_empty());
    }

    #[rstest]
    fn shr_on_list_repeats() {
        assert_eq!(list![1, 2, 3] >> list!['z'], list!['z', 'z', 'z']);
    }

    // =========================================================================
    // Macro
    // =========================================================================

    monad_binary_op!(fn identity_sub = Sub for Identity);
    monad_binary_op!(fn maybe_mul = Mul for Maybe);

    #[rstest]
    fn named_operator_functions() {
        assert_eq!(identity_sub(Identity(10), Identity(4)), Identity(6));
        assert_eq!(maybe_mul(maybe(6), maybe(7)), maybe(42));
        assert_eq!(maybe_mul(maybe(6), absent()), absent());
    }
}

//! Lifting functions of several arguments.
//!
//! [`lift_n!`](crate::lift_n) promotes an `N`-ary function into one over
//! wrapped values by nesting `bind`s and finishing with `fmap`:
//!
//! ```text
//! lift_n!(f, m1, m2, m3)
//!   == bind(m1, |x1| bind(m2, |x2| fmap(|x3| f(x1, x2, x3), m3)))
//! ```
//!
//! Each monad expression is evaluated exactly once, left to right, before
//! any binding happens. Inner monads and already bound values are cloned
//! when the variant revisits them (once per `List` branch), so they must be
//! `Clone`. There is no upper limit on the arity.

/// Promotes an `N`-ary function to one over wrapped values.
///
/// All arguments must share one variant. Absence anywhere short-circuits
/// the result; for `List`, `function` is applied to every combination of
/// elements, leftmost argument varying slowest.
///
/// # Examples
///
/// ```rust
/// use monadic::{absent, lift_n, list, maybe, Maybe};
///
/// let add = |x: i32, y: i32| x + y;
/// assert_eq!(lift_n!(add, maybe(1), maybe(2)), maybe(3));
/// assert_eq!(lift_n!(add, maybe(1), absent()), Maybe::absent());
///
/// let add3 = |x: i32, y: i32, z: i32| x + y + z;
/// let sums = lift_n!(add3, list![8], list![3, 4, 5], list![3, 4, 5]);
/// assert_eq!(sums, list![14, 15, 16, 15, 16, 17, 16, 17, 18]);
/// ```
#[macro_export]
macro_rules! lift_n {
    ($function:expr, $($monad:expr),+ $(,)?) => {
        $crate::__lift_n_evaluate!([$function] [] $($monad),+)
    };
}

/// Alias of [`lift_n!`](crate::lift_n).
///
/// # Examples
///
/// ```rust
/// use monadic::{fmap_n, maybe};
///
/// assert_eq!(fmap_n!(|x: i32, y: i32| x * y, maybe(6), maybe(7)), maybe(42));
/// ```
#[macro_export]
macro_rules! fmap_n {
    ($($tokens:tt)*) => {
        $crate::lift_n!($($tokens)*)
    };
}

// Binds every monad expression to a fresh local, in order, then hands the
// locals to `__lift_n_nest!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __lift_n_evaluate {
    ([$function:expr] [$($name:ident)+]) => {{
        #[allow(unused_mut)]
        let mut function = $function;
        $crate::__lift_n_nest!(@outer function; $($name)+)
    }};
    ([$function:expr] [$($name:ident)*] $head:expr $(, $rest:expr)*) => {{
        let monad = $head;
        $crate::__lift_n_evaluate!([$function] [$($name)* monad] $($rest),*)
    }};
}

// The outermost monad is consumed; deeper ones are cloned per branch.
#[doc(hidden)]
#[macro_export]
macro_rules! __lift_n_nest {
    (@outer $function:ident; $only:ident) => {
        $crate::combinator::fmap(|value| $function(value), $only)
    };
    (@outer $function:ident; $head:ident $($rest:ident)+) => {
        $crate::combinator::bind($head, |value| {
            $crate::__lift_n_nest!($function; [value]; $($rest)+)
        })
    };
    ($function:ident; [$($bound:ident)+]; $last:ident) => {
        $crate::combinator::fmap(
            |value| $function($(::core::clone::Clone::clone(&$bound),)+ value),
            ::core::clone::Clone::clone(&$last),
        )
    };
    ($function:ident; [$($bound:ident)+]; $head:ident $($rest:ident)+) => {
        $crate::combinator::bind(::core::clone::Clone::clone(&$head), |value| {
            $crate::__lift_n_nest!($function; [$($bound)+ value]; $($rest)+)
        })
    };
}

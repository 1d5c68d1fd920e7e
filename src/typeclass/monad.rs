//! Monad type class - the contract every variant implements.
//!
//! A variant joins the combinator library by implementing [`Monad`] on its
//! brand (see [`Kind`]). The contract is deliberately small:
//!
//! - [`Monad::pure`] lifts a bare value (`Return`).
//! - [`Monad::bind`] sequences a continuation according to the variant's
//!   control-state rule. Every other combinator is derived from it.
//! - [`Monad::state`] reads the control state (presence flag for `Maybe`,
//!   nothing at all for `List`).
//!
//! Variants that have an absorbing "failure" value additionally implement
//! [`MonadZero`], which is what default construction produces.
//!
//! No combinator in this crate inspects a variant's storage; they only call
//! these operations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! K::bind(K::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! K::bind(m, K::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! K::bind(K::bind(m, f), g) == K::bind(m, |x| K::bind(f(x), g))
//! ```
//!
//! ## Zero Law (`MonadZero`)
//!
//! The continuation is never invoked on the empty value:
//!
//! ```text
//! K::bind(K::empty(), f) == K::empty()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::Monad;
//! use monadic::{Maybe, MaybeKind};
//!
//! let five = MaybeKind::bind(Maybe::of(3), |x| Maybe::of(x + 2));
//! assert_eq!(five, Maybe::of(5));
//!
//! let skipped = MaybeKind::bind(Maybe::<i32>::absent(), |x| Maybe::of(x + 2));
//! assert_eq!(skipped, Maybe::absent());
//! ```

use std::fmt;

use super::higher::Kind;

/// The sequencing contract shared by every variant.
///
/// `bind` takes an `FnMut` continuation so that branching variants such as
/// `List` can apply it once per element. Single-valued variants call it at
/// most once.
pub trait Monad: Kind {
    /// Variant-specific control state.
    ///
    /// The state of a value is uniquely determined by the binds that
    /// produced it.
    type State: Clone + PartialEq + fmt::Debug;

    /// Wraps a bare value in the variant's success state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Monad;
    /// use monadic::{List, ListKind};
    ///
    /// assert_eq!(ListKind::pure('x'), List::singleton('x'));
    /// ```
    fn pure<A>(value: A) -> Self::Of<A>;

    /// Applies `function` to the payload and composes the results according
    /// to the variant's rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Monad;
    /// use monadic::{list, ListKind};
    ///
    /// let branched = ListKind::bind(list![1, 2], |x| list![x, x * 10]);
    /// assert_eq!(branched, list![1, 10, 2, 20]);
    /// ```
    fn bind<A, B, F>(monad: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> Self::Of<B>;

    /// Reads the control state of `monad`.
    fn state<A>(monad: &Self::Of<A>) -> Self::State;
}

/// A [`Monad`] with an absorbing empty value.
///
/// `empty` is what default construction of the variant produces. It is
/// absorbing under `bind`: the continuation is never invoked.
pub trait MonadZero: Monad {
    /// The variant's absent/empty value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::MonadZero;
    /// use monadic::{Maybe, MaybeKind};
    ///
    /// assert_eq!(MaybeKind::empty::<i32>(), Maybe::absent());
    /// ```
    fn empty<A>() -> Self::Of<A>;
}

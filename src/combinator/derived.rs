//! Combinators derived from `bind`.
//!
//! Each function here is defined once against the [`Monad`] contract and
//! behaves identically for every variant. Arguments follow the usual
//! function-first order (`fmap(f, m)`), except `bind` and `then` which read
//! left to right like `>>=` and `>>`.

use crate::typeclass::{Apply, Kinded, Monad};

/// `monad >>= function`.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::bind;
/// use monadic::{absent, maybe, Maybe};
///
/// assert_eq!(bind(maybe(3), |x| maybe(x + 2)), maybe(5));
/// assert_eq!(bind(absent::<i32>(), |x| maybe(x + 2)), Maybe::absent());
/// ```
#[inline]
pub fn bind<M, B, F>(monad: M, function: F) -> Apply<M::Kind, B>
where
    M: Kinded,
    M::Kind: Monad,
    F: FnMut(M::Inner) -> Apply<M::Kind, B>,
{
    <M::Kind as Monad>::bind::<M::Inner, B, F>(monad.into_kind(), function)
}

/// `function =<< monad`: `bind` with the arguments flipped.
#[inline]
pub fn bind_with<M, B, F>(function: F, monad: M) -> Apply<M::Kind, B>
where
    M: Kinded,
    M::Kind: Monad,
    F: FnMut(M::Inner) -> Apply<M::Kind, B>,
{
    bind::<M, B, F>(monad, function)
}

/// `first >> next`: sequences `next` after `first`, discarding the first
/// payload. Absence in `first` propagates; for `List`, `next` is repeated
/// once per element of `first`.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::then;
/// use monadic::{list, maybe, Maybe};
///
/// assert_eq!(then(maybe(0), maybe(3)), maybe(3));
/// assert_eq!(then(Maybe::<i32>::absent(), maybe(3)), Maybe::absent());
/// assert_eq!(then(list![1, 2], list!['a']), list!['a', 'a']);
/// ```
#[inline]
pub fn then<M, N>(first: M, next: N) -> Apply<M::Kind, N::Inner>
where
    M: Kinded,
    N: Kinded<Kind = M::Kind>,
    M::Kind: Monad,
    Apply<M::Kind, N::Inner>: Clone,
{
    let next = next.into_kind();
    bind::<M, N::Inner, _>(first, move |_| next.clone())
}

/// Applies `function` to the payload, preserving the structure.
///
/// `fmap(g, fmap(f, m)) == fmap(|x| g(f(x)), m)`.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::fmap;
/// use monadic::{list, maybe};
///
/// assert_eq!(fmap(|x: i32| x + 2, maybe(3)), maybe(5));
/// assert_eq!(fmap(|x: i32| x * 2, list![1, 2, 3]), list![2, 4, 6]);
/// ```
#[inline]
pub fn fmap<M, B, F>(mut function: F, monad: M) -> Apply<M::Kind, B>
where
    M: Kinded,
    M::Kind: Monad,
    F: FnMut(M::Inner) -> B,
{
    bind::<M, B, _>(monad, |value| <M::Kind as Monad>::pure(function(value)))
}

/// Promotes a unary function to one over wrapped values. Same as [`fmap`];
/// see [`lift_n!`](crate::lift_n) for more arguments.
#[inline]
pub fn lift<M, B, F>(function: F, monad: M) -> Apply<M::Kind, B>
where
    M: Kinded,
    M::Kind: Monad,
    F: FnMut(M::Inner) -> B,
{
    fmap::<M, B, F>(function, monad)
}

/// Flattens one level of nesting: `bind(monad, |inner| inner)`.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::join;
/// use monadic::{absent, list, maybe, List, Maybe};
///
/// assert_eq!(join(maybe(maybe(1))), maybe(1));
/// assert_eq!(join(maybe(absent::<i32>())), Maybe::absent());
/// assert_eq!(join(list![list![1], List::new(), list![2, 3]]), list![1, 2, 3]);
/// ```
#[inline]
pub fn join<M>(monad: M) -> Apply<M::Kind, <M::Inner as Kinded>::Inner>
where
    M: Kinded,
    M::Kind: Monad,
    M::Inner: Kinded<Kind = M::Kind>,
{
    bind::<M, <M::Inner as Kinded>::Inner, _>(monad, Kinded::into_kind)
}

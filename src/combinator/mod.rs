//! Generic combinators over any [`Monad`](crate::typeclass::Monad).
//!
//! Everything here is written once against the contract and works for every
//! variant, including user-defined ones:
//!
//! - [`bind`], [`bind_with`], [`then`], [`fmap`], [`lift`], [`join`]
//! - [`lift_n!`](crate::lift_n) and [`fmap_n!`](crate::fmap_n) for functions
//!   of several arguments
//! - the traversals [`sequence`], [`map`], [`map_unzip`], [`filter`],
//!   [`zip`], [`fold`]
//!
//! The functions accept concrete values (`Maybe<T>`, `List<T>`, ...) and
//! return the same variant.
//!
//! # Examples
//!
//! ```rust
//! use monadic::combinator::{fmap, sequence};
//! use monadic::{list, maybe};
//!
//! assert_eq!(fmap(|x: i32| x + 1, maybe(1)), maybe(2));
//! assert_eq!(
//!     sequence(vec![list![1, 2], list![3]]),
//!     list![vec![1, 3], vec![2, 3]]
//! );
//! ```

mod chain;
mod derived;
mod lift_n;
mod traverse;

pub use derived::{bind, bind_with, fmap, join, lift, then};
pub use traverse::{filter, fold, map, map_unzip, sequence, zip};

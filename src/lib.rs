//! # monadic
//!
//! A generic monad library: one sequencing contract, two variants
//! implementing it, and combinators written once against the contract.
//!
//! ## Overview
//!
//! - **Contract**: [`Monad`](typeclass::Monad) (`pure`, `bind`, `state`) and
//!   [`MonadZero`](typeclass::MonadZero) for variants with an absorbing
//!   empty value
//! - **Variants**: [`Maybe`] (optional value, short-circuits on absence),
//!   [`List`] (nondeterministic choice, Cartesian branching), and the
//!   trivial [`Identity`]
//! - **Combinators**: `bind`, `then`, `fmap`, `lift`, [`lift_n!`], `join`
//!   and the traversals `sequence`, `map`, `map_unzip`, `filter`, `zip`,
//!   `fold` in [`combinator`]
//! - **Operators**: `+ - * / %` and `>>` on `Maybe` and `List`
//!
//! ## Feature Flags
//!
//! - `operators` (default): arithmetic and `>>` operators on the variants
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `List`
//! - `tracing`: trace events when a traversal stops early
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let halve = |x: i32| if x % 2 == 0 { maybe(x / 2) } else { absent() };
//!
//! assert_eq!(maybe(8).bind(halve).bind(halve), maybe(2));
//! assert_eq!(map(halve, vec![2, 4]), maybe(vec![1, 2]));
//! assert_eq!(map(halve, vec![2, 3]), Maybe::absent());
//!
//! let pairs = lift_n!(|x: i32, c: char| (x, c), list![1, 2], list!['a', 'b']);
//! assert_eq!(pairs, list![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the variants, the contract and every combinator.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::typeclass::*;
    pub use crate::{
        AbsentValueError, List, ListKind, ListState, Maybe, MaybeKind, MaybeState, Nothing,
        absent, maybe,
    };
    pub use crate::{fmap_n, lift_n, list, monad_binary_op};
}

pub mod combinator;
pub mod typeclass;

mod error;
mod list;
mod maybe;
mod operator;

pub use error::AbsentValueError;
pub use list::{List, ListKind, ListState};
pub use maybe::{Maybe, MaybeKind, MaybeState, Nothing, absent, maybe};
pub use typeclass::{Identity, IdentityKind, IdentityState};

#[doc(hidden)]
pub use paste;

//! Type class traits forming the monad contract.
//!
//! - [`Kind`] / [`Kinded`]: higher-kinded type emulation through GATs
//! - [`Monad`]: the sequencing contract (`pure`, `bind`, `state`)
//! - [`MonadZero`]: variants with an absorbing empty value
//! - [`Identity`]: the trivial variant
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Each variant is represented by a zero-sized brand implementing [`Kind`],
//! whose generic associated type `Of<A>` names the concrete container. The
//! contract is implemented on the brand, so generic combinators can relate
//! `Apply<K, A>` and `Apply<K, Vec<A>>` in a single signature.
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Monad, MonadZero};
//! use monadic::{Maybe, MaybeKind};
//!
//! let present = MaybeKind::pure(42);
//! assert_eq!(present, Maybe::of(42));
//!
//! let absent = MaybeKind::empty::<i32>();
//! assert_eq!(MaybeKind::bind(absent, |x| Maybe::of(x + 1)), Maybe::absent());
//! ```

mod higher;
mod identity;
mod monad;

pub use higher::{Apply, Kind, Kinded};
pub use identity::{Identity, IdentityKind, IdentityState};
pub use monad::{Monad, MonadZero};

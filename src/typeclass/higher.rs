//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! This module splits the problem in two:
//!
//! - A [`Kind`] is a zero-sized *brand* standing for the constructor itself
//!   (`MaybeKind` stands for `Maybe<_>`). Its associated type `Of<A>` applies
//!   the constructor to `A`.
//! - A [`Kinded`] value is a concrete container (`Maybe<i32>`) that knows its
//!   brand and its payload type.
//!
//! Generic combinators are written against the brand, so a function can name
//! `Apply<K, Vec<A>>` and `Apply<K, A>` in one signature and have them agree
//! on the constructor. For concrete brands the projection normalises, so
//! callers only ever see `Maybe<Vec<i32>>` or `List<(i32, char)>`.
//!
//! # Example
//!
//! ```rust
//! use monadic::typeclass::{Apply, Kinded};
//! use monadic::{Maybe, MaybeKind};
//!
//! fn brand_of<M: Kinded>(_value: &M) -> &'static str {
//!     std::any::type_name::<M::Kind>()
//! }
//!
//! let wrapped: Apply<MaybeKind, i32> = Maybe::of(7);
//! assert!(brand_of(&wrapped).ends_with("MaybeKind"));
//! ```

/// A brand standing for a single-parameter type constructor.
///
/// # Laws
///
/// For any brand `K` and payload `A`:
///
/// 1. **Round trip**: `<K::Of<A> as Kinded>::Kind` is `K` and its `Inner` is `A`.
///    The associated type bound enforces this at compile time.
pub trait Kind: Sized {
    /// The constructor applied to `A`.
    type Of<A>: Kinded<Kind = Self, Inner = A>;
}

/// Shorthand for `<K as Kind>::Of<A>`.
pub type Apply<K, A> = <K as Kind>::Of<A>;

/// A concrete container that belongs to a [`Kind`].
///
/// Every variant implements this with `into_kind` being the identity
/// function. Generic code uses it to move from an arbitrary container type
/// `M` to `Apply<M::Kind, M::Inner>`, a type the brand's operations accept,
/// without requiring the compiler to prove that the two are equal.
pub trait Kinded: Sized {
    /// The brand of the constructor this value was built with.
    type Kind: Kind;

    /// The payload type.
    type Inner;

    /// Re-types the value as its brand's applied form.
    fn into_kind(self) -> Apply<Self::Kind, Self::Inner>;
}

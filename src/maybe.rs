//! Maybe type - an optional value whose absence short-circuits `bind`.
//!
//! `Maybe<T>` has two states, `Absent` and `Present(T)`. `Absent` is
//! absorbing: once it enters a bind chain every later continuation is
//! skipped and never invoked. Default construction produces `Absent`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::{Maybe, Nothing, maybe};
//!
//! let five = maybe(3).bind(|x| maybe(x + 2));
//! assert_eq!(five, maybe(5));
//!
//! let absent: Maybe<i32> = Nothing.into();
//! assert_eq!(absent.bind(|x| maybe(x + 2)), Nothing);
//! ```

use crate::error::AbsentValueError;
use crate::typeclass::{Kind, Kinded, Monad, MonadZero};

/// An optional value.
///
/// Two `Maybe` values are equal iff both are absent, or both are present
/// with equal payloads.
///
/// # Examples
///
/// ```rust
/// use monadic::Maybe;
///
/// let present = Maybe::of("x");
/// assert!(present.is_present());
/// assert_eq!(present.value(), Ok(&"x"));
///
/// let absent: Maybe<&str> = Maybe::default();
/// assert!(absent.is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value; absorbing under `bind`.
    Absent,
    /// A value.
    Present(T),
}

/// The absence marker.
///
/// Converts into any `Maybe<T>` and compares equal to every absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nothing;

/// Brand for [`Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeKind;

/// Control state of a [`Maybe`]: whether a value is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeState {
    /// `true` for `Present`.
    pub present: bool,
}

static_assertions::assert_eq_size!(Nothing, ());
static_assertions::assert_eq_size!(MaybeKind, ());
static_assertions::assert_impl_all!(Maybe<i32>: Copy, Eq, Default, Send, Sync);

/// Wraps `value` in a present `Maybe`.
#[inline]
pub const fn maybe<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// An absent `Maybe`.
#[inline]
pub const fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

impl<T> Maybe<T> {
    /// Wraps `value` in a present `Maybe`.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// An absent `Maybe`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The control state.
    #[inline]
    pub const fn state(&self) -> MaybeState {
        MaybeState {
            present: self.is_present(),
        }
    }

    /// Borrows the payload.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::{AbsentValueError, Maybe};
    ///
    /// assert_eq!(Maybe::of(1).value(), Ok(&1));
    /// assert_eq!(Maybe::<i32>::absent().value(), Err(AbsentValueError));
    /// ```
    #[inline]
    pub const fn value(&self) -> Result<&T, AbsentValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValueError),
        }
    }

    /// Takes the payload.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] when the value is absent.
    #[inline]
    pub fn into_value(self) -> Result<T, AbsentValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValueError),
        }
    }

    /// Borrows the payload as an `Option`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Sequences `function` after this value.
    ///
    /// An absent value is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::Maybe;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Maybe::of(x / 2) } else { Maybe::absent() };
    /// assert_eq!(Maybe::of(8).bind(halve).bind(halve), Maybe::of(2));
    /// assert_eq!(Maybe::of(6).bind(halve).bind(halve), Maybe::absent());
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Transforms the payload, preserving absence.
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.bind(|value| Maybe::Present(function(value)))
    }

    /// Sequences `next` after this value, discarding this payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::Maybe;
    ///
    /// assert_eq!(Maybe::of(0).then(Maybe::of("next")), Maybe::of("next"));
    /// assert_eq!(Maybe::<i32>::absent().then(Maybe::of("next")), Maybe::absent());
    /// ```
    #[inline]
    pub fn then<B>(self, next: Maybe<B>) -> Maybe<B> {
        self.bind(|_| next)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::Maybe;
    ///
    /// assert_eq!(Maybe::of(Maybe::of(1)).join(), Maybe::of(1));
    /// assert_eq!(Maybe::of(Maybe::<i32>::absent()).join(), Maybe::absent());
    /// assert_eq!(Maybe::<Maybe<i32>>::absent().join(), Maybe::absent());
    /// ```
    #[inline]
    pub fn join(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Nothing> for Maybe<T> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> PartialEq<Nothing> for Maybe<T> {
    #[inline]
    fn eq(&self, _other: &Nothing) -> bool {
        self.is_absent()
    }
}

impl<T> PartialEq<Maybe<T>> for Nothing {
    #[inline]
    fn eq(&self, other: &Maybe<T>) -> bool {
        other.is_absent()
    }
}

// =============================================================================
// Contract
// =============================================================================

impl Kind for MaybeKind {
    type Of<A> = Maybe<A>;
}

impl<T> Kinded for Maybe<T> {
    type Kind = MaybeKind;
    type Inner = T;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Monad for MaybeKind {
    type State = MaybeState;

    #[inline]
    fn pure<A>(value: A) -> Maybe<A> {
        Maybe::Present(value)
    }

    #[inline]
    fn bind<A, B, F>(monad: Maybe<A>, mut function: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        match monad {
            Maybe::Present(value) => function(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    #[inline]
    fn state<A>(monad: &Maybe<A>) -> MaybeState {
        monad.state()
    }
}

impl MonadZero for MaybeKind {
    #[inline]
    fn empty<A>() -> Maybe<A> {
        Maybe::Absent
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

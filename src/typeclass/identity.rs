//! Identity wrapper type - the trivial variant.
//!
//! `Identity` wraps exactly one value and its `bind` always applies the
//! continuation once. It has no absorbing state, so it implements
//! [`Monad`] but not [`MonadZero`](super::MonadZero). It serves as:
//!
//! - The simplest model for checking the monad laws
//! - A witness that a new variant joins the combinator library by
//!   implementing the contract and nothing else

use super::{Kind, Kinded, Monad};

/// The identity monad - wraps a value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use monadic::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

/// Brand for [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityKind;

/// Control state of [`Identity`]: there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityState;

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// The control state.
    #[inline]
    pub const fn state(&self) -> IdentityState {
        IdentityState
    }

    /// Passes the inner value to `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::Identity;
    ///
    /// let result = Identity::new(4).bind(|x| Identity::new(x * x));
    /// assert_eq!(result, Identity::new(16));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    /// Transforms the inner value.
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl Kind for IdentityKind {
    type Of<A> = Identity<A>;
}

impl<A> Kinded for Identity<A> {
    type Kind = IdentityKind;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Monad for IdentityKind {
    type State = IdentityState;

    #[inline]
    fn pure<A>(value: A) -> Identity<A> {
        Identity(value)
    }

    #[inline]
    fn bind<A, B, F>(monad: Identity<A>, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        function(monad.0)
    }

    #[inline]
    fn state<A>(_monad: &Identity<A>) -> IdentityState {
        IdentityState
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_default_wraps_default_payload() {
        let default_int: Identity<i32> = Identity::default();
        assert_eq!(default_int.into_inner(), 0);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<String> = String::from("hello").into();
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MAX)]
    fn identity_bind_passes_value_through(#[case] value: i32) {
        let result = Identity::new(value).bind(|x| Identity::new(i64::from(x) + 1));
        assert_eq!(result, Identity::new(i64::from(value) + 1));
    }

    #[rstest]
    fn identity_fmap_composition() {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Identity::new(5).fmap(function1).fmap(function2);
        let right = Identity::new(5).fmap(|x| function2(function1(x)));
        assert_eq!(left, right);
    }

    #[rstest]
    fn identity_state_is_trivial() {
        assert_eq!(IdentityKind::state(&Identity::new('a')), IdentityState);
    }
}

//! List type - the nondeterministic-choice monad.
//!
//! `List<T>` holds an ordered sequence of results. `bind` applies its
//! continuation to every element and concatenates the results, so one input
//! can branch into many outputs. The control state is trivial; "failure" is
//! the empty list, which `bind` propagates because there is nothing to apply
//! the continuation to.
//!
//! # Examples
//!
//! ```rust
//! use monadic::list;
//!
//! let branched = list![1, 2, 3].bind(|x| list![x, x * 10]);
//! assert_eq!(branched, list![1, 10, 2, 20, 3, 30]);
//!
//! let pruned = list![1, 2, 3].bind(|x| if x == 2 { list![] } else { list![x] });
//! assert_eq!(pruned, list![1, 3]);
//! ```

use std::slice;
use std::vec;

use crate::typeclass::{Kind, Kinded, Monad, MonadZero};

/// An ordered sequence of nondeterministic results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct List<T> {
    values: Vec<T>,
}

/// Brand for [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListKind;

/// Control state of a [`List`]: there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListState;

static_assertions::assert_eq_size!(ListKind, ());
static_assertions::assert_eq_size!(ListState, ());

/// Builds a [`List`] the way `vec!` builds a `Vec`.
///
/// # Examples
///
/// ```rust
/// use monadic::{List, list};
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// assert_eq!(list![1, 2, 3].len(), 3);
/// assert_eq!(list!['a'; 2], List::from(vec!['a', 'a']));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($element:expr; $count:expr) => {
        $crate::List::from(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::List::from(::std::vec![$($element),+])
    };
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates a list holding one element.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Number of results.
    #[inline]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no results.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The results as a slice.
    #[inline]
    pub const fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    /// The payload: every result, in order.
    ///
    /// Unlike [`Maybe::value`](crate::Maybe::value) this cannot fail; an
    /// empty list yields an empty slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::{List, list};
    ///
    /// assert_eq!(list![1, 2].value(), &[1, 2]);
    /// assert!(List::<i32>::new().value().is_empty());
    /// ```
    #[inline]
    pub const fn value(&self) -> &[T] {
        self.values()
    }

    /// Consumes the list, returning its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Iterates over the results.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    /// The control state.
    #[inline]
    pub const fn state(&self) -> ListState {
        ListState
    }

    /// Applies `function` to every element and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::list;
    ///
    /// assert_eq!(list![1, 2].bind(|x| list![x; x as usize]), list![1, 2, 2]);
    /// ```
    pub fn bind<B, F>(self, mut function: F) -> List<B>
    where
        F: FnMut(T) -> List<B>,
    {
        let mut values = Vec::with_capacity(self.values.len());
        for value in self.values {
            values.extend(function(value).values);
        }
        List { values }
    }

    /// Transforms every element.
    pub fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        List {
            values: self.values.into_iter().map(function).collect(),
        }
    }

    /// Repeats `next` once per element of this list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::list;
    ///
    /// assert_eq!(list![0, 0].then(&list!['a', 'b']), list!['a', 'b', 'a', 'b']);
    /// ```
    pub fn then<B: Clone>(self, next: &List<B>) -> List<B> {
        let capacity = self.values.len().saturating_mul(next.values.len());
        let mut values = Vec::with_capacity(capacity);
        for _ in self.values {
            values.extend(next.values.iter().cloned());
        }
        List { values }
    }
}

impl<T> List<List<T>> {
    /// Concatenates the inner lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::{List, list};
    ///
    /// let nested = list![list![1, 2], List::new(), list![3]];
    /// assert_eq!(nested.join(), list![1, 2, 3]);
    /// ```
    #[inline]
    pub fn join(self) -> List<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> From<List<T>> for Vec<T> {
    #[inline]
    fn from(list: List<T>) -> Self {
        list.values
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self {
            values: iterable.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// =============================================================================
// Contract
// =============================================================================

impl Kind for ListKind {
    type Of<A> = List<A>;
}

impl<T> Kinded for List<T> {
    type Kind = ListKind;
    type Inner = T;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Monad for ListKind {
    type State = ListState;

    #[inline]
    fn pure<A>(value: A) -> List<A> {
        List::singleton(value)
    }

    #[inline]
    fn bind<A, B, F>(monad: List<A>, function: F) -> List<B>
    where
        F: FnMut(A) -> List<B>,
    {
        monad.bind(function)
    }

    #[inline]
    fn state<A>(_monad: &List<A>) -> ListState {
        ListState
    }
}

impl MonadZero for ListKind {
    #[inline]
    fn empty<A>() -> List<A> {
        List::new()
    }
}

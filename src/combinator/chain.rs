//! Persistent accumulator threaded through traversal binds.
//!
//! A traversal extends the partial result inside every branch the variant
//! produces. `Chain` is a reversed cons list with `Rc`-shared links, so a
//! branch is extended in O(1) without copying the prefix it shares with its
//! siblings. The finished chain is materialised once, into a vector sized
//! from the cached length.

use std::rc::Rc;

struct Link<A> {
    value: A,
    previous: Option<Rc<Self>>,
}

pub struct Chain<A> {
    last: Option<Rc<Link<A>>>,
    length: usize,
}

impl<A> Chain<A> {
    pub const fn new() -> Self {
        Self {
            last: None,
            length: 0,
        }
    }

    #[cfg(test)]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// A new chain ending in `value`; `self` is left untouched.
    pub fn push(&self, value: A) -> Self {
        Self {
            last: Some(Rc::new(Link {
                value,
                previous: self.last.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Values in insertion order. Links owned by this chain alone are moved
    /// out; links shared with another branch are cloned.
    pub fn into_vec(mut self) -> Vec<A>
    where
        A: Clone,
    {
        let mut values = Vec::with_capacity(self.length);
        let mut cursor = self.last.take();
        while let Some(link) = cursor {
            match Rc::try_unwrap(link) {
                Ok(Link { value, previous }) => {
                    values.push(value);
                    cursor = previous;
                }
                Err(shared) => {
                    values.push(shared.value.clone());
                    cursor = shared.previous.as_ref().map(Rc::clone);
                }
            }
        }
        values.reverse();
        values
    }
}

impl<A> Clone for Chain<A> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
            length: self.length,
        }
    }
}

// Iterative drop; the default recursive one overflows the stack on long chains.
impl<A> Drop for Chain<A> {
    fn drop(&mut self) {
        let mut cursor = self.last.take();
        while let Some(link) = cursor {
            match Rc::try_unwrap(link) {
                Ok(mut link) => cursor = link.previous.take(),
                Err(_) => break,
            }
        }
    }
}

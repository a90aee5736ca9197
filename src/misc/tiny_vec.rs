use std::{fmt::Debug, hash::Hash, ops::{Deref, DerefMut}};

/// Inline vector with a fixed capacity. Slots past `len` always hold
/// `T::default()`, so the backing array never carries stale values.
#[derive(Clone, Copy)]
pub struct TinyVec<T, const N: usize>
where
    T: Copy + Default,
{
    buf: [T; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + Default + PartialEq,
{
    pub fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { buf: [T::default(); N], len: 0 }
    }

    /// Copies `values` into a new vector. Panics if `values` exceeds the capacity.
    pub fn from_slice(values: &[T]) -> Self {
        let mut vec = Self::new();
        for &value in values {
            vec.push(value);
        }
        vec
    }

    /// Builds a vector holding `count` copies of `value`.
    pub fn repeat(value: T, count: usize) -> Self {
        let mut vec = Self::new();
        for _ in 0..count {
            vec.push(value);
        }
        vec
    }

    pub fn push(&mut self, value: T) {
        if (self.len as usize) < N {
            self.buf[self.len as usize] = value;
            self.len += 1;
        } else {
            panic!("TinyVec is full");
        }
    }

    /// Removes the first occurrence of `element`, shifting the tail left.
    /// Returns whether an element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        let Some(pos) = self.iter().position(|x| x == element) else {
            return false;
        };
        let len = self.len as usize;
        self.buf.copy_within(pos + 1..len, pos);
        self.buf[len - 1] = T::default();
        self.len -= 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, const N: usize> Default for TinyVec<T, N>
where
    T: Copy + Default + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Deref for TinyVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len as usize]
    }
}

impl<T: Copy + Default, const N: usize> DerefMut for TinyVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf[..self.len as usize]
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for TinyVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for TinyVec<T, N> {}

impl<T: Copy + Default + Hash, const N: usize> Hash for TinyVec<T, N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Copy + Default + Debug, const N: usize> Debug for TinyVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

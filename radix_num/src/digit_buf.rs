//! # DigitBuf
//! Growable storage for the digits of a [`BigNum`](crate::BigNum), least significant digit first.
//!
//! The buffer keeps `capacity` zero-initialised slots of which only the first `len` are meaningful.
//! Appending past the capacity doubles it (`0 -> 2 -> 4 -> 8 ...`), clearing keeps it.
//! Every fallible operation reports through [`BigNumError`] instead of panicking.

use std::fmt;

use crate::error::{BigNumError, Result};

#[derive(Clone, Default)]
pub struct DigitBuf {
    len: usize,
    storage: Vec<u8>,
}

// 构造与容量管理
impl DigitBuf {
    pub fn new() -> Self {
        DigitBuf { len: 0, storage: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = DigitBuf::new();
        buf.reserve(capacity)?;
        Ok(buf)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Grows the capacity to exactly `capacity` slots, never shrinks it.
    /// Asking for fewer slots than there are digits is rejected.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len {
            return Err(BigNumError::InvalidCapacity { requested: capacity, len: self.len });
        }
        if capacity > self.capacity() {
            self.grow_to(capacity)?;
        }
        Ok(())
    }

    fn grow_to(&mut self, capacity: usize) -> Result<()> {
        let additional = capacity - self.storage.len();
        self.storage
            .try_reserve_exact(additional)
            .map_err(|_| BigNumError::ResourceExhausted { requested: capacity })?;
        self.storage.resize(capacity, 0);
        Ok(())
    }

    /// Grows or shrinks the meaningful part to `new_len` digits, new digits are zero.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if new_len > self.capacity() {
            self.grow_to(new_len)?;
        }
        if new_len > self.len {
            self.storage[self.len..new_len].fill(0);
        }
        self.len = new_len;
        Ok(())
    }

    /// Forgets every digit, the allocation is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

// 读写
impl DigitBuf {
    pub fn append(&mut self, digit: u8) -> Result<()> {
        if self.len == self.capacity() {
            let doubled = self
                .capacity()
                .checked_mul(2)
                .ok_or(BigNumError::ResourceExhausted { requested: usize::MAX })?;
            self.grow_to(doubled.max(2))?;
        }
        self.storage[self.len] = digit;
        self.len += 1;
        Ok(())
    }

    pub fn truncate_last(&mut self) -> Option<u8> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.storage[self.len])
        }
    }

    pub fn get(&self, index: usize) -> Result<u8> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(BigNumError::IndexOutOfBounds { index, len: self.len })
    }

    pub fn set(&mut self, index: usize, digit: u8) -> Result<()> {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = digit;
                Ok(())
            }
            None => Err(BigNumError::IndexOutOfBounds { index, len }),
        }
    }

    /// Most significant digit.
    pub fn last(&self) -> Option<u8> {
        self.as_slice().last().copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.storage[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.as_slice().iter()
    }

    pub fn reverse(&mut self) {
        let digits = self.as_mut_slice();
        let n = digits.len();
        for i in 0..n / 2 {
            digits.swap(i, n - 1 - i);
        }
    }

    /// Moves every digit `n` places up and zero fills the bottom, i.e. multiplies by `radix^n`.
    /// A buffer holding a lone zero is left alone.
    pub fn shift_up(&mut self, n: usize) -> Result<()> {
        if n == 0 || self.as_slice() == [0] {
            return Ok(());
        }
        let old_len = self.len;
        let new_len = old_len
            .checked_add(n)
            .ok_or(BigNumError::ResourceExhausted { requested: usize::MAX })?;
        self.resize(new_len)?;
        let digits = self.as_mut_slice();
        digits.copy_within(0..old_len, n);
        digits[..n].fill(0);
        Ok(())
    }
}

impl PartialEq for DigitBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for DigitBuf {}

impl fmt::Debug for DigitBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<&[u8]> for DigitBuf {
    fn from(digits: &[u8]) -> Self {
        DigitBuf { len: digits.len(), storage: digits.to_vec() }
    }
}

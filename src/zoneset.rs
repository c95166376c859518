//! A fixed-capacity set of zone indices packed into an unsigned integer.
//!
//! The set is `no_std` friendly, `Copy`, hashable and totally ordered by its
//! raw bits, which makes it usable directly as a search state: two sets with
//! the same members always compare equal regardless of insertion order.

use core::ops::{BitAnd, BitOr};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::MAX_ZONES;
use crate::zone::ZoneId;

/// Errors returned by zone-set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneSetError {
    /// Requested capacity N exceeds `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Zone index is outside [0..N).
    IndexOutOfBounds { index: usize, capacity: usize },
}

impl fmt::Display for ZoneSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSetError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N={} exceeds T::BITS={}", n, capacity)
            }
            ZoneSetError::IndexOutOfBounds { index, capacity } => {
                write!(f, "IndexOutOfBounds: index={}, capacity={}", index, capacity)
            }
        }
    }
}

/// A set of up to `N` zone indices stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// Zone set used by catalogs and the search.
pub type ZoneSet = ZoneMask<u64, MAX_ZONES>;

impl<T, const N: usize> ZoneMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn mask() -> T {
        if N >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << N) - T::one()
        }
    }

    /// Number of zones the set can hold.
    pub const fn capacity() -> usize {
        N
    }

    /// Create a new empty set without size check.
    #[inline]
    pub fn new() -> Self {
        ZoneMask { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N > T::BITS.
    pub fn try_new() -> Result<Self, ZoneSetError> {
        let capacity = mem::size_of::<T>() * 8;
        if N > capacity {
            Err(ZoneSetError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(ZoneMask { bits: T::zero() })
        }
    }

    /// Set holding every index below `len` (clamped to N).
    pub fn first(len: usize) -> Self {
        let mut set = Self::new();
        for idx in 0..len.min(N) {
            set.bits = set.bits | (T::one() << idx);
        }
        set
    }

    /// Number of zones in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `index` is a member. Out-of-range indices are never members.
    pub fn contains(&self, index: ZoneId) -> bool {
        index < N && ((self.bits >> index) & T::one()) != T::zero()
    }

    /// Adds `index` to the set.
    pub fn insert(&mut self, index: ZoneId) -> Result<(), ZoneSetError> {
        self.check_bounds(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    /// Adds an index the caller knows is below N.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `index >= N`; release builds leave the set
    /// unchanged.
    #[inline]
    pub fn insert_unchecked(&mut self, index: ZoneId) {
        debug_assert!(index < N, "zone index {} out of range for {} zones", index, N);
        if index < N {
            self.bits = self.bits | (T::one() << index);
        }
    }

    /// Removes `index` from the set.
    pub fn remove(&mut self, index: ZoneId) -> Result<(), ZoneSetError> {
        self.check_bounds(index)?;
        self.bits = self.bits & !(T::one() << index);
        Ok(())
    }

    /// Copy of the set with `index` added.
    pub fn with(self, index: ZoneId) -> Result<Self, ZoneSetError> {
        let mut next = self;
        next.insert(index)?;
        Ok(next)
    }

    #[inline]
    fn check_bounds(&self, index: ZoneId) -> Result<(), ZoneSetError> {
        if index >= N {
            Err(ZoneSetError::IndexOutOfBounds { index, capacity: N })
        } else {
            Ok(())
        }
    }

    /// Consumes the set and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a set from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        ZoneMask {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a set from an iterator over zone indices.
    pub fn from_iter<I>(iter: I) -> Result<Self, ZoneSetError>
    where
        I: IntoIterator<Item = ZoneId>,
    {
        let mut set = Self::new();
        for idx in iter {
            set.insert(idx)?;
        }
        Ok(set)
    }

    /// Iterator over members in ascending index order.
    #[inline]
    pub fn iter(&self) -> Members<T, N> {
        Members {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for ZoneMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for ZoneMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneMask<{}, {}>", any::type_name::<T>(), N)?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a zone set.
#[derive(Clone, Copy)]
pub struct Members<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Members<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = ZoneId;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(idx);
            }
        }
        None
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ZoneMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = ZoneId;
    type IntoIter = Members<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Intersection of two sets.
impl<T, const N: usize> BitAnd for ZoneMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        ZoneMask::from_raw(self.into_raw() & rhs.into_raw())
    }
}

/// Union of two sets.
impl<T, const N: usize> BitOr for ZoneMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        ZoneMask::from_raw(self.into_raw() | rhs.into_raw())
    }
}

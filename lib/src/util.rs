extern crate num_traits;

use std::ops::{AddAssign, Deref};

use num_traits::{ToPrimitive, Unsigned};

/// Monotonic tally used for translation statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += T::one();
    }
}

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign + ToPrimitive,
{
    /// `self / total`, or `0.0` when `total` is zero.
    pub fn ratio_of(&self, total: Counter<T>) -> f64 {
        if total.0.is_zero() {
            return 0.0;
        }

        match (self.0.to_f64(), total.0.to_f64()) {
            (Some(part), Some(whole)) => part / whole,
            _ => 0.0,
        }
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AddAssign for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

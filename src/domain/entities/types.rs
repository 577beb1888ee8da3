use humansize::{DECIMAL, format_size};
use std::fmt::{Display, Formatter, Result};
use std::iter::Sum;
use std::ops::Add;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes(pub u64);

impl From<u64> for Bytes {
    fn from(value: u64) -> Self {
        Bytes(value)
    }
}

impl From<Bytes> for u64 {
    fn from(value: Bytes) -> u64 {
        value.0
    }
}

impl Add for Bytes {
    type Output = Bytes;

    fn add(self, rhs: Bytes) -> Bytes {
        Bytes(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Bytes {
    fn sum<I: Iterator<Item = Bytes>>(iter: I) -> Bytes {
        iter.fold(Bytes::default(), Add::add)
    }
}

impl Bytes {
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for Bytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", format_size(self.0, DECIMAL))
    }
}

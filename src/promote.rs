use std::{boxed::Box, string::String, vec::Vec};

/// Folds a key into the single byte that drives [`promote`].
///
/// Integer-like keys XOR every byte of their bit pattern together, sequence
/// keys XOR every byte of their contents. Implementations must be pure: the
/// same key always folds to the same byte.
///
/// ## Example
///
/// ```
/// use towerskl::Promote;
///
/// assert_eq!(0x0102_0304u32.fold(), 0x01 ^ 0x02 ^ 0x03 ^ 0x04);
/// assert_eq!("ab".fold(), b'a' ^ b'b');
/// assert_eq!("".fold(), 0);
/// ```
pub trait Promote {
  /// Returns the XOR of every byte of the key.
  fn fold(&self) -> u8;
}

/// Returns `true` if a key that has already been promoted `prior` times
/// should occupy one more layer.
///
/// The answer is bit `prior % 8` of the key's [`fold`](Promote::fold).
/// A key folding to `0` never leaves the base layer.
///
/// ## Example
///
/// ```
/// use towerskl::promote;
///
/// // 5 = 0b0000_0101
/// assert!(promote(&5u32, 0));
/// assert!(!promote(&5u32, 1));
/// assert!(promote(&5u32, 2));
/// assert!(!promote(&0u32, 0));
/// ```
#[inline]
pub fn promote<K: Promote + ?Sized>(key: &K, prior: u32) -> bool {
  key.fold() & (1 << (prior % 8)) != 0
}

#[inline]
fn xor_bytes(bytes: &[u8]) -> u8 {
  bytes.iter().fold(0, |acc, b| acc ^ b)
}

macro_rules! impl_promote_for_int {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Promote for $ty {
        #[inline]
        fn fold(&self) -> u8 {
          xor_bytes(&self.to_le_bytes())
        }
      }
    )*
  };
}

impl_promote_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Promote for bool {
  #[inline]
  fn fold(&self) -> u8 {
    *self as u8
  }
}

impl Promote for char {
  #[inline]
  fn fold(&self) -> u8 {
    (*self as u32).fold()
  }
}

impl Promote for str {
  #[inline]
  fn fold(&self) -> u8 {
    xor_bytes(self.as_bytes())
  }
}

impl Promote for String {
  #[inline]
  fn fold(&self) -> u8 {
    self.as_str().fold()
  }
}

impl Promote for [u8] {
  #[inline]
  fn fold(&self) -> u8 {
    xor_bytes(self)
  }
}

impl<const N: usize> Promote for [u8; N] {
  #[inline]
  fn fold(&self) -> u8 {
    xor_bytes(self)
  }
}

impl Promote for Vec<u8> {
  #[inline]
  fn fold(&self) -> u8 {
    xor_bytes(self)
  }
}

impl<T: Promote + ?Sized> Promote for Box<T> {
  #[inline]
  fn fold(&self) -> u8 {
    T::fold(self)
  }
}

impl<T: Promote + ?Sized> Promote for &T {
  #[inline]
  fn fold(&self) -> u8 {
    T::fold(self)
  }
}

use core::iter::FusedIterator;

use super::*;

/// An iterator over the entries of a [`SkipMap`], in ascending key order.
///
/// Created by [`SkipMap::iter`].
pub struct Iter<'a, K, V> {
  arena: &'a Arena<K, V>,
  next: Option<NodeId>,
  remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
      remaining: self.remaining,
    }
  }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.next?;
    match self.arena.entry(node) {
      Some(ent) => {
        self.next = self.arena.next(node);
        self.remaining -= 1;
        Some(ent)
      }
      // reached the right sentinel of the base layer
      None => {
        self.next = None;
        None
      }
    }
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`SkipMap`], in ascending order.
///
/// Created by [`SkipMap::keys`].
pub struct Keys<'a, K, V> {
  iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      iter: self.iter.clone(),
    }
  }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
  type Item = &'a K;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.iter.next().map(|(k, _)| k)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`SkipMap`], in ascending key order.
///
/// Created by [`SkipMap::values`].
pub struct Values<'a, K, V> {
  iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      iter: self.iter.clone(),
    }
  }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
  type Item = &'a V;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.iter.next().map(|(_, v)| v)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> SkipMap<K, V> {
  /// Returns an iterator over the entries, walking the base layer from left to right.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::SkipMap;
  ///
  /// let map = SkipMap::from([(2u32, 'b'), (1, 'a'), (3, 'c')]);
  /// let entries: Vec<_> = map.iter().collect();
  /// assert_eq!(entries, [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
  /// ```
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter {
      arena: &self.arena,
      next: self.arena.next(self.bottom_left),
      remaining: self.len,
    }
  }

  /// Returns an iterator over the keys in ascending order.
  #[inline]
  pub fn keys(&self) -> Keys<'_, K, V> {
    Keys { iter: self.iter() }
  }

  /// Returns an iterator over the values in ascending key order.
  #[inline]
  pub fn values(&self) -> Values<'_, K, V> {
    Values { iter: self.iter() }
  }
}

impl<'a, K, V> IntoIterator for &'a SkipMap<K, V> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

use dbutils::equivalent::Comparable;

use super::*;
use crate::error::Error;

impl<K: Ord, V> SkipMap<K, V> {
  /// Returns the highest node of the tower holding `key`.
  #[inline]
  fn locate<Q>(&self, key: &Q) -> Option<Hit>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    self.seek(|k| k.compare(key).reverse(), true).hit
  }

  /// Returns the value bound to `key`.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::KeyNotFound` if the key is not in the map.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::{Error, SkipMap};
  ///
  /// let mut map = SkipMap::new();
  /// map.insert(3u32, 5u32);
  /// assert_eq!(map.find(&3), Ok(&5));
  /// assert_eq!(map.find(&4), Err(Error::KeyNotFound));
  /// ```
  #[inline]
  pub fn find<Q>(&self, key: &Q) -> Result<&V, Error>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    self.get(key).ok_or(Error::KeyNotFound)
  }

  /// Returns the value bound to `key`, if it exists.
  #[inline]
  pub fn get<Q>(&self, key: &Q) -> Option<&V>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    self
      .locate(key)
      .and_then(|hit| self.arena.entry(hit.node))
      .map(|(_, v)| v)
  }

  /// Returns `true` if the key exists in the map.
  #[inline]
  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    self.locate(key).is_some()
  }

  /// Returns how many layers the tower of `key` occupies, the base layer counting as `1`.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::KeyNotFound` if the key is not in the map.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// map.insert(0u32, ());
  /// map.insert(5u32, ());
  /// // 0 never promotes, 5 = 0b101 promotes once.
  /// assert_eq!(map.height(&0), Ok(1));
  /// assert_eq!(map.height(&5), Ok(2));
  /// ```
  pub fn height<Q>(&self, key: &Q) -> Result<u32, Error>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    self
      .locate(key)
      .map(|hit| hit.layer + 1)
      .ok_or(Error::KeyNotFound)
  }

  /// Returns the key that follows `key` in ascending order.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::KeyNotFound` if the key is not in the map.
  /// - Returns `Error::NoSuccessor` if the key is the largest key.
  pub fn next_key<Q>(&self, key: &Q) -> Result<&K, Error>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    let hit = self.locate(key).ok_or(Error::KeyNotFound)?;
    let base = self.base_of(hit.node);
    self
      .arena
      .next(base)
      .and_then(|next| self.arena.key(next))
      .ok_or(Error::NoSuccessor)
  }

  /// Returns the key that precedes `key` in ascending order.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::KeyNotFound` if the key is not in the map.
  /// - Returns `Error::NoPredecessor` if the key is the smallest key.
  pub fn previous_key<Q>(&self, key: &Q) -> Result<&K, Error>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    let prev = self.seek(|k| k.compare(key).reverse(), false).prev;
    let found = self
      .arena
      .next(prev)
      .and_then(|next| self.arena.key(next))
      .is_some_and(|k| k.compare(key).is_eq());
    if !found {
      return Err(Error::KeyNotFound);
    }

    self.arena.key(prev).ok_or(Error::NoPredecessor)
  }

  /// Returns `true` if `key` is the smallest key in the map.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::KeyNotFound` if the key is not in the map.
  pub fn is_smallest_key<Q>(&self, key: &Q) -> Result<bool, Error>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    let hit = self.locate(key).ok_or(Error::KeyNotFound)?;
    let first = self.arena.next(self.bottom_left).map(|n| self.arena[n].kind);
    Ok(first == Some(self.arena[hit.node].kind))
  }

  /// Returns `true` if `key` is the largest key in the map.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::KeyNotFound` if the key is not in the map.
  pub fn is_largest_key<Q>(&self, key: &Q) -> Result<bool, Error>
  where
    Q: ?Sized,
    K: Comparable<Q>,
  {
    let hit = self.locate(key).ok_or(Error::KeyNotFound)?;
    let base = self.base_of(hit.node);
    Ok(self.arena.next(base) == Some(self.bottom_right))
  }

  /// Returns the smallest key and its value.
  #[inline]
  pub fn first(&self) -> Option<(&K, &V)> {
    self
      .arena
      .next(self.bottom_left)
      .and_then(|n| self.arena.entry(n))
  }

  /// Returns the largest key and its value.
  #[inline]
  pub fn last(&self) -> Option<(&K, &V)> {
    let prev = self.seek(|_| cmp::Ordering::Greater, false).prev;
    self.arena.entry(prev)
  }
}

impl<K: Ord + Clone, V> SkipMap<K, V> {
  /// Returns every key in ascending order.
  ///
  /// The result is a snapshot: it does not follow later insertions.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::SkipMap;
  ///
  /// let map: SkipMap<u32, u32> = (0..10).rev().map(|i| (i, 100 + i)).collect();
  /// assert_eq!(map.all_keys_in_order(), (0..10).collect::<Vec<_>>());
  /// ```
  pub fn all_keys_in_order(&self) -> std::vec::Vec<K> {
    self.keys().cloned().collect()
  }
}

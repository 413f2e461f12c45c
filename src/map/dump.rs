use super::*;

/// A layer-by-layer printout of a [`SkipMap`], top layer first.
///
/// Created by [`SkipMap::dump`]. Each layer is printed on its own line as a
/// chain of `(key, value)` pairs, sentinels shown as `(-, -)`, and closed by
/// `END`.
///
/// ```text
/// (-, -) -> (-, -) -> END
/// (-, -) -> (5, 7) -> (-, -) -> END
/// (-, -) -> (0, 1) -> (5, 7) -> (-, -) -> END
/// ```
pub struct Dump<'a, K, V> {
  map: &'a SkipMap<K, V>,
}

impl<K, V> SkipMap<K, V> {
  /// Returns a [`Display`](fmt::Display) view of every layer of the map.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// map.insert(0u32, 1u32);
  /// map.insert(5, 7);
  ///
  /// assert_eq!(
  ///   map.dump().to_string(),
  ///   "(-, -) -> (-, -) -> END\n\
  ///    (-, -) -> (5, 7) -> (-, -) -> END\n\
  ///    (-, -) -> (0, 1) -> (5, 7) -> (-, -) -> END\n",
  /// );
  /// ```
  #[inline]
  pub fn dump(&self) -> Dump<'_, K, V> {
    Dump { map: self }
  }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Dump<'_, K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let arena = &self.map.arena;
    let mut left = Some(self.map.top_left);

    while let Some(layer) = left {
      let mut curr = Some(layer);
      while let Some(node) = curr {
        match arena.entry(node) {
          Some((k, v)) => write!(f, "({k}, {v}) -> ")?,
          None => f.write_str("(-, -) -> ")?,
        }
        curr = arena.next(node);
      }
      writeln!(f, "END")?;
      left = arena.down(layer);
    }

    Ok(())
  }
}

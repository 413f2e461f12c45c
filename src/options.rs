/// The layer cap a fresh [`SkipMap`](crate::SkipMap) starts with.
pub(crate) const DEFAULT_MAX_LAYERS: u32 = 13;

/// The largest cap [`Options::layer_cap`] can ever compute, `3 * usize::BITS + 1`.
pub(crate) const MAX_LAYERS: u32 = 3 * usize::BITS + 1;

/// Once the map holds more than this many keys, the layer cap follows its size.
pub(crate) const DEFAULT_GROW_AFTER: usize = 16;

/// Options for [`SkipMap`](crate::SkipMap).
///
/// With the defaults the layer cap starts at `13` and, once the map holds more
/// than `16` keys, becomes `3 * ceil(log2(len)) + 1` whenever that is larger.
#[viewit::viewit(vis_all = "pub(crate)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  max_layers: u32,
  grow_after: usize,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_layers: DEFAULT_MAX_LAYERS,
      grow_after: DEFAULT_GROW_AFTER,
    }
  }

  /// Sets the initial layer cap.
  ///
  /// While the number of layers is not below the cap, no key is promoted
  /// out of the base layer. A map always has at least two layers, so a cap
  /// of `2` or less keeps every key at height `1` until the cap grows.
  ///
  /// A key whose [`fold`](crate::Promote::fold) is `0xFF` promotes on every
  /// step, so a single such key stacks the map up to the cap. The cap is
  /// clamped to `3 * usize::BITS + 1`, the largest value the size-based growth
  /// can reach.
  ///
  /// The default value is `13`.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::Options;
  ///
  /// let opts = Options::new().with_max_layers(4);
  /// assert_eq!(opts.max_layers(), 4);
  ///
  /// let opts = Options::new().with_max_layers(u32::MAX);
  /// assert_eq!(opts.max_layers(), 3 * usize::BITS + 1);
  /// ```
  #[inline]
  pub const fn with_max_layers(mut self, max_layers: u32) -> Self {
    self.max_layers = if max_layers > MAX_LAYERS {
      MAX_LAYERS
    } else {
      max_layers
    };
    self
  }

  /// Sets the size above which the layer cap is recomputed from the number of keys.
  ///
  /// The default value is `16`.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::Options;
  ///
  /// let opts = Options::new().with_grow_after(usize::MAX);
  /// assert_eq!(opts.grow_after(), usize::MAX);
  /// ```
  #[inline]
  pub const fn with_grow_after(mut self, grow_after: usize) -> Self {
    self.grow_after = grow_after;
    self
  }

  /// Returns the initial layer cap.
  #[inline]
  pub const fn max_layers(&self) -> u32 {
    self.max_layers
  }

  /// Returns the size above which the layer cap is recomputed.
  #[inline]
  pub const fn grow_after(&self) -> usize {
    self.grow_after
  }

  /// Returns the layer cap for a map holding `len` keys whose current cap is `current`.
  ///
  /// The cap never shrinks.
  #[inline]
  pub(crate) const fn layer_cap(&self, len: usize, current: u32) -> u32 {
    if len <= self.grow_after {
      return current;
    }

    let cap = 3 * ceil_log2(len) + 1;
    if cap > current {
      cap
    } else {
      current
    }
  }
}

/// `ceil(log2(n))` for `n >= 1`.
#[inline]
const fn ceil_log2(n: usize) -> u32 {
  if n <= 1 {
    0
  } else {
    usize::BITS - (n - 1).leading_zeros()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ceil_log2() {
    assert_eq!(ceil_log2(1), 0);
    assert_eq!(ceil_log2(2), 1);
    assert_eq!(ceil_log2(3), 2);
    assert_eq!(ceil_log2(4), 2);
    assert_eq!(ceil_log2(16), 4);
    assert_eq!(ceil_log2(17), 5);
    assert_eq!(ceil_log2(1 << 20), 20);
    assert_eq!(ceil_log2((1 << 20) + 1), 21);
  }

  #[test]
  fn test_layer_cap() {
    let opts = Options::new();
    assert_eq!(opts.layer_cap(1, 13), 13);
    assert_eq!(opts.layer_cap(16, 13), 13);
    assert_eq!(opts.layer_cap(17, 13), 16);
    assert_eq!(opts.layer_cap(32, 16), 16);
    assert_eq!(opts.layer_cap(33, 16), 19);
    assert_eq!(opts.layer_cap(1000, 19), 31);
  }

  #[test]
  fn test_max_layers_is_clamped() {
    assert_eq!(Options::new().with_max_layers(300).max_layers(), MAX_LAYERS);
    assert_eq!(Options::new().with_max_layers(MAX_LAYERS).max_layers(), MAX_LAYERS);
    assert_eq!(Options::new().with_max_layers(40).max_layers(), 40);
    assert_eq!(Options::new().layer_cap(usize::MAX, 0), MAX_LAYERS);
  }

  #[test]
  fn test_layer_cap_never_shrinks() {
    let opts = Options::new().with_max_layers(40);
    assert_eq!(opts.layer_cap(17, 40), 40);

    let opts = Options::new().with_grow_after(0);
    assert_eq!(opts.layer_cap(1, 13), 13);
    assert_eq!(opts.layer_cap(2, 2), 4);
  }
}

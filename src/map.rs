use core::{cmp, fmt};

use super::{
  arena::Arena,
  node::{Kind, Node, NodeId},
  options::Options,
  promote::Promote,
};

mod api;
mod dump;
pub use dump::Dump;
mod insert;
mod iterator;
pub use iterator::*;


/// An ordered map backed by a layered skiplist with deterministic promotion.
///
/// Every layer is a sorted chain between a `-inf` and a `+inf` sentinel,
/// layer `0` holds every key, and the topmost layer is kept empty unless the
/// layer cap has been reached. How many layers a key occupies is decided by
/// [`promote`](crate::promote), so the shape of the list only depends on the
/// keys and the order in which they were inserted.
///
/// Keys and values are immutable once added and deletion is not supported.
///
/// The map performs no internal locking. It is `Send` and `Sync` whenever `K`
/// and `V` are, so concurrent callers can share it behind their own lock.
#[derive(Clone)]
pub struct SkipMap<K, V> {
  arena: Arena<K, V>,
  opts: Options,
  len: usize,
  /// Number of layers, sentinel-only top layer included. Always `>= 2`.
  layers: u32,
  max_layers: u32,

  top_left: NodeId,
  top_right: NodeId,
  bottom_left: NodeId,
  bottom_right: NodeId,
}

/// The outcome of [`SkipMap::seek`].
#[derive(Debug, Clone, Copy)]
struct Seek {
  /// The last node visited on the lowest layer reached.
  prev: NodeId,
  hit: Option<Hit>,
}

/// The highest node of a matching tower.
#[derive(Debug, Clone, Copy)]
struct Hit {
  node: NodeId,
  layer: u32,
}

// --------------------------------Public Methods--------------------------------
impl<K, V> SkipMap<K, V> {
  /// Creates an empty map with two layers and the default [`Options`].
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::SkipMap;
  ///
  /// let map = SkipMap::<u32, u32>::new();
  /// assert_eq!(map.num_layers(), 2);
  /// assert!(map.is_empty());
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::with_options(Options::new())
  }

  /// Creates an empty map with two layers and the given [`Options`].
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::{Options, SkipMap};
  ///
  /// let map = SkipMap::<u32, u32>::with_options(Options::new().with_max_layers(4));
  /// assert_eq!(map.max_layers(), 4);
  /// ```
  pub fn with_options(opts: Options) -> Self {
    let mut arena = Arena::new();

    let bottom_left = arena.alloc(Node::new(Kind::Head, None, None));
    let bottom_right = arena.alloc(Node::new(Kind::Tail, None, None));
    arena[bottom_left].next = Some(bottom_right);

    let top_left = arena.alloc(Node::new(Kind::Head, None, Some(bottom_left)));
    let top_right = arena.alloc(Node::new(Kind::Tail, None, Some(bottom_right)));
    arena[top_left].next = Some(top_right);
    arena[bottom_left].up = Some(top_left);
    arena[bottom_right].up = Some(top_right);

    Self {
      arena,
      max_layers: opts.max_layers(),
      opts,
      len: 0,
      layers: 2,
      top_left,
      top_right,
      bottom_left,
      bottom_right,
    }
  }

  /// Returns the number of keys in the map.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the map holds no keys.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the number of layers, the empty top layer included.
  ///
  /// An empty map has two layers: the base layer and an empty top layer.
  #[inline]
  pub fn num_layers(&self) -> u32 {
    self.layers
  }

  /// Returns the current layer cap.
  ///
  /// The cap only grows. While [`num_layers`](SkipMap::num_layers) is not
  /// below it, newly inserted keys stay in the base layer.
  #[inline]
  pub fn max_layers(&self) -> u32 {
    self.max_layers
  }

  /// Returns the options the map was created with.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }
}

impl<K: Ord, V> SkipMap<K, V> {
  /// The top-down search every operation is built on.
  ///
  /// `cmp` returns the ordering of the target relative to a node key. Starting
  /// from the top-left sentinel, each layer is scanned with [`scan`](Self::scan)
  /// before dropping one layer down. With `stop_on_match` the search returns as
  /// soon as it meets the target, which is the top of the target's tower;
  /// otherwise it always ends on layer `0` at the last node before the target.
  fn seek<F>(&self, mut cmp: F, stop_on_match: bool) -> Seek
  where
    F: FnMut(&K) -> cmp::Ordering,
  {
    let mut prev = self.top_left;
    let mut layer = self.layers - 1;

    loop {
      let (last, hit) = self.scan(prev, &mut cmp, stop_on_match);
      if let Some(node) = hit {
        return Seek {
          prev: last,
          hit: Some(Hit { node, layer }),
        };
      }

      match self.arena.down(last) {
        Some(down) if layer > 0 => {
          prev = down;
          layer -= 1;
        }
        _ => return Seek { prev: last, hit: None },
      }
    }
  }

  /// Moves right along one layer starting at `prev`, as long as the next node
  /// is a key the target is greater than.
  ///
  /// Returns the last node reached and, with `stop_on_match`, the next node
  /// if it holds the target.
  fn scan<F>(&self, mut prev: NodeId, cmp: &mut F, stop_on_match: bool) -> (NodeId, Option<NodeId>)
  where
    F: FnMut(&K) -> cmp::Ordering,
  {
    while let Some(next) = self.arena.next(prev) {
      let Some(key) = self.arena.key(next) else {
        break;
      };

      match cmp(key) {
        cmp::Ordering::Greater => prev = next,
        cmp::Ordering::Equal if stop_on_match => return (prev, Some(next)),
        _ => break,
      }
    }

    (prev, None)
  }

  /// Follows `down` from a tower node to its base layer node.
  fn base_of(&self, mut node: NodeId) -> NodeId {
    while let Some(down) = self.arena.down(node) {
      node = down;
    }
    node
  }
}

impl<K, V> Default for SkipMap<K, V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SkipMap<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<K: Ord + Promote, V> FromIterator<(K, V)> for SkipMap<K, V> {
  /// Builds a map from the pairs, keeping the first value of a repeated key.
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut map = Self::new();
    map.extend(iter);
    map
  }
}

impl<K: Ord + Promote, V> Extend<(K, V)> for SkipMap<K, V> {
  /// Inserts the pairs in order. Pairs whose key is already present are dropped.
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    for (k, v) in iter {
      self.insert(k, v);
    }
  }
}

impl<K: Ord + Promote, V, const N: usize> From<[(K, V); N]> for SkipMap<K, V> {
  fn from(arr: [(K, V); N]) -> Self {
    Self::from_iter(arr)
  }
}

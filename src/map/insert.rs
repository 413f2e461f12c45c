use super::*;
use crate::promote::promote;

impl<K: Ord + Promote, V> SkipMap<K, V> {
  /// Inserts a key-value pair. Returns `false`, leaving the map untouched,
  /// if the key is already present.
  ///
  /// The new key always lands in the base layer and then climbs one layer for
  /// every consecutive `true` of [`promote`](crate::promote), as long as the
  /// number of layers stays below [`max_layers`](SkipMap::max_layers). When a
  /// key reaches the top layer, a new empty layer is stacked above it.
  ///
  /// ## Example
  ///
  /// ```
  /// use towerskl::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// assert!(map.insert("Shindler".to_string(), "ICS 46"));
  /// assert!(!map.insert("Shindler".to_string(), "ICS 45C"));
  /// assert_eq!(map.find("Shindler"), Ok(&"ICS 46"));
  /// ```
  pub fn insert(&mut self, key: K, value: V) -> bool {
    let prev = self.seek(|k| key.cmp(k), false).prev;
    let duplicated = self
      .arena
      .next(prev)
      .and_then(|next| self.arena.key(next))
      .is_some_and(|k| k == &key);
    if duplicated {
      #[cfg(feature = "tracing")]
      tracing::trace!("rejected duplicate key, the skiplist is unchanged");
      return false;
    }

    let entry = self.arena.alloc_entry(key, value);
    let base = self.arena.link_after(prev, Kind::Entry(entry), None);
    self.len += 1;

    let cap = self.opts.layer_cap(self.len, self.max_layers);
    if cap != self.max_layers {
      #[cfg(feature = "tracing")]
      tracing::debug!(len = self.len, from = self.max_layers, to = cap, "raised the layer cap");
      self.max_layers = cap;
    }

    self.build_tower(entry, base);
    true
  }

  /// Grows the tower of `entry` upwards from its base layer node.
  ///
  /// The left sentinel of the layer being filled is tracked through `up`, so
  /// each promotion only scans the one layer it links into.
  fn build_tower(&mut self, entry: usize, base: NodeId) {
    let mut below = base;
    let mut left = self.arena.up(self.bottom_left);
    let mut flips = 0;

    while promote(self.arena.entry_key(entry), flips) && self.layers < self.max_layers {
      let Some(layer_left) = left else {
        break;
      };
      flips += 1;

      let (at, _) = {
        let key = self.arena.entry_key(entry);
        self.scan(layer_left, &mut |k: &K| key.cmp(k), false)
      };
      let node = self.arena.link_after(at, Kind::Entry(entry), Some(below));
      self.arena[below].up = Some(node);

      if flips == self.layers - 1 {
        self.push_layer();
      }

      below = node;
      left = self.arena.up(layer_left);
    }

    #[cfg(feature = "tracing")]
    if self.layers >= self.max_layers && promote(self.arena.entry_key(entry), flips) {
      tracing::trace!(
        height = flips + 1,
        max_layers = self.max_layers,
        "promotion truncated by the layer cap"
      );
    }
  }

  /// Stacks a new empty layer on top of the current top layer.
  fn push_layer(&mut self) {
    let left = self
      .arena
      .alloc(Node::new(Kind::Head, None, Some(self.top_left)));
    let right = self
      .arena
      .alloc(Node::new(Kind::Tail, None, Some(self.top_right)));
    self.arena[left].next = Some(right);
    self.arena[self.top_left].up = Some(left);
    self.arena[self.top_right].up = Some(right);

    self.top_left = left;
    self.top_right = right;
    self.layers += 1;

    #[cfg(feature = "tracing")]
    tracing::debug!(layers = self.layers, "added a new top layer");
  }
}

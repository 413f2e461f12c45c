/// The position of a [`Node`] inside the [`Arena`](crate::arena::Arena).
///
/// Ids are handed out by the arena only and stay valid for the arena's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
  #[inline]
  pub(crate) const fn new(idx: usize) -> Self {
    Self(idx)
  }

  #[inline]
  pub(crate) const fn index(self) -> usize {
    self.0
  }
}

/// What a node stands for in its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Kind {
  /// The `-inf` sentinel on the left end of a layer.
  Head,
  /// The `+inf` sentinel on the right end of a layer.
  Tail,
  /// A real key. Every node of one tower points at the same entry.
  Entry(usize),
}

/// One node of a layer.
///
/// `next` is the owning edge of the layer chain, `down` and `up` are plain
/// lookups into the neighbouring layers. Only the tail sentinel has no `next`,
/// only layer `0` has no `down` and only the top layer has no `up`.
#[derive(Debug, Clone)]
pub(crate) struct Node {
  pub(crate) kind: Kind,
  pub(crate) next: Option<NodeId>,
  pub(crate) down: Option<NodeId>,
  pub(crate) up: Option<NodeId>,
}

impl Node {
  #[inline]
  pub(crate) const fn new(kind: Kind, next: Option<NodeId>, down: Option<NodeId>) -> Self {
    Self {
      kind,
      next,
      down,
      up: None,
    }
  }

  #[inline]
  pub(crate) const fn entry(&self) -> Option<usize> {
    match self.kind {
      Kind::Entry(idx) => Some(idx),
      _ => None,
    }
  }
}

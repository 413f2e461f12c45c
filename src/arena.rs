use core::ops::{Index, IndexMut};
use std::vec::Vec;

use crate::node::{Kind, Node, NodeId};

/// Owns every node and every key-value pair of a [`SkipMap`](crate::SkipMap).
///
/// Nodes are never freed one by one: the whole arena goes away with the map,
/// so each node and each pair is released exactly once. A key-value pair is
/// stored once and shared by every node of its tower through [`Kind::Entry`].
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
  nodes: Vec<Node>,
  entries: Vec<(K, V)>,
}

impl<K, V> Arena<K, V> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      nodes: Vec::new(),
      entries: Vec::new(),
    }
  }

  /// Returns the number of allocated nodes, sentinels included.
  #[cfg(test)]
  #[inline]
  pub(crate) fn nodes(&self) -> usize {
    self.nodes.len()
  }

  #[inline]
  pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
    let id = NodeId::new(self.nodes.len());
    self.nodes.push(node);
    id
  }

  #[inline]
  pub(crate) fn alloc_entry(&mut self, key: K, value: V) -> usize {
    self.entries.push((key, value));
    self.entries.len() - 1
  }

  /// Allocates a node of `kind` and links it right after `prev` on the same layer.
  pub(crate) fn link_after(&mut self, prev: NodeId, kind: Kind, down: Option<NodeId>) -> NodeId {
    let next = self[prev].next;
    let id = self.alloc(Node::new(kind, next, down));
    self[prev].next = Some(id);
    id
  }

  #[inline]
  pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
    self[id].next
  }

  #[inline]
  pub(crate) fn down(&self, id: NodeId) -> Option<NodeId> {
    self[id].down
  }

  #[inline]
  pub(crate) fn up(&self, id: NodeId) -> Option<NodeId> {
    self[id].up
  }

  /// Returns the key of the node, or `None` for a sentinel.
  #[inline]
  pub(crate) fn key(&self, id: NodeId) -> Option<&K> {
    self[id].entry().map(|idx| &self.entries[idx].0)
  }

  /// Returns the key-value pair of the node, or `None` for a sentinel.
  #[inline]
  pub(crate) fn entry(&self, id: NodeId) -> Option<(&K, &V)> {
    self[id].entry().map(|idx| {
      let (k, v) = &self.entries[idx];
      (k, v)
    })
  }

  #[inline]
  pub(crate) fn entry_key(&self, idx: usize) -> &K {
    &self.entries[idx].0
  }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
  type Output = Node;

  #[inline]
  fn index(&self, id: NodeId) -> &Node {
    &self.nodes[id.index()]
  }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
  #[inline]
  fn index_mut(&mut self, id: NodeId) -> &mut Node {
    &mut self.nodes[id.index()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_link_after() {
    let mut arena = Arena::<u32, &str>::new();
    let head = arena.alloc(Node::new(Kind::Head, None, None));
    let tail = arena.alloc(Node::new(Kind::Tail, None, None));
    arena[head].next = Some(tail);

    let b = arena.alloc_entry(2, "b");
    let a = arena.alloc_entry(1, "a");
    let nb = arena.link_after(head, Kind::Entry(b), None);
    let na = arena.link_after(head, Kind::Entry(a), None);

    assert_eq!(arena.next(head), Some(na));
    assert_eq!(arena.next(na), Some(nb));
    assert_eq!(arena.next(nb), Some(tail));
    assert_eq!(arena.next(tail), None);
    assert_eq!(arena.key(head), None);
    assert_eq!(arena.key(na), Some(&1));
    assert_eq!(arena.entry(nb), Some((&2, &"b")));
    assert_eq!(arena.entry_key(a), &1);
    assert_eq!(arena.nodes(), 4);
  }

  #[test]
  fn test_sentinels_are_explicit() {
    let mut arena = Arena::<u32, u32>::new();
    let zero = arena.alloc_entry(0, 0);
    let head = arena.alloc(Node::new(Kind::Head, None, None));
    let node = arena.alloc(Node::new(Kind::Entry(zero), None, Some(head)));

    assert_eq!(arena[head].entry(), None);
    assert_eq!(arena[node].entry(), Some(zero));
    assert_eq!(arena.key(head), None);
    assert_eq!(arena.key(node), Some(&0));
    assert_eq!(arena.down(node), Some(head));
    assert_eq!(arena.up(node), None);
  }
}

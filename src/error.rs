/// Error type for the [`SkipMap`](crate::SkipMap).
///
/// Every failing query aborts without touching the structure. Inserting a key
/// that already exists is not an error, [`SkipMap::insert`](crate::SkipMap::insert)
/// reports it by returning `false`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
  /// Indicates that the operation requires a key which is not in the skiplist.
  #[error("the key does not exist in the skip list")]
  KeyNotFound,

  /// Indicates that the key exists but is the largest key, so it has no successor.
  #[error("the key is the largest key in the skip list")]
  NoSuccessor,

  /// Indicates that the key exists but is the smallest key, so it has no predecessor.
  #[error("the key is the smallest key in the skip list")]
  NoPredecessor,
}

//! An ordered map built on a sentinel-bounded skiplist whose tower heights are
//! decided by a deterministic promotion rule instead of a random coin.
//!
//! Every layer of the list is a sorted chain bounded by a `-inf` and a `+inf`
//! sentinel. Layer `0` holds every key; a key climbs one layer higher each
//! time [`promote`] says so, which depends only on the key's bit pattern and
//! the number of promotions it already received. The same keys inserted in
//! the same order therefore always produce exactly the same structure.
//!
//! ```text
//! S_2: -inf -----------------> inf
//! S_1: -inf --> 5 -----------> inf
//! S_0: -inf --> 5 --> 8 -----> inf
//! ```
//!
//! Keys are never removed and neither keys nor values are updated in place:
//! inserting a key that is already present is rejected.
//!
//! # Example
//!
//! ```
//! use towerskl::{Error, SkipMap};
//!
//! let mut map = SkipMap::new();
//! assert_eq!(map.num_layers(), 2);
//!
//! assert!(map.insert(3u32, 5u32));
//! assert!(map.insert(5, 7));
//! assert!(!map.insert(3, 100));
//!
//! assert_eq!(map.find(&3), Ok(&5));
//! assert_eq!(map.height(&5), Ok(2));
//! assert_eq!(map.next_key(&3), Ok(&5));
//! assert_eq!(map.next_key(&5), Err(Error::NoSuccessor));
//! assert_eq!(map.all_keys_in_order(), [3, 5]);
//! ```
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("`towerskl` requires either the 'std' or 'alloc' feature to be enabled");

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

mod arena;
mod error;
mod node;
mod options;
mod promote;

/// The skiplist map and its iterators.
pub mod map;

pub use dbutils::equivalent::Comparable;
pub use error::Error;
pub use map::{Dump, Iter, Keys, SkipMap, Values};
pub use options::Options;
pub use promote::{promote, Promote};

use towerskl::{Error, Options, SkipMap};

fn main() {
  const N: u64 = 100_000;

  let mut l = SkipMap::new();
  for i in 0..N {
    assert!(l.insert(i.wrapping_mul(0x9E37_79B9_7F4A_7C15), i));
  }
  for i in 0..N {
    assert!(!l.insert(i.wrapping_mul(0x9E37_79B9_7F4A_7C15), 0));
  }
  assert_eq!(l.len(), N as usize);
  // 3 * ceil(log2(100_000)) + 1
  assert_eq!(l.max_layers(), 52);
  assert!(l.num_layers() <= l.max_layers());

  let keys = l.all_keys_in_order();
  assert!(keys.windows(2).all(|w| w[0] < w[1]));
  for w in keys.windows(2) {
    assert_eq!(l.next_key(&w[0]), Ok(&w[1]));
    assert_eq!(l.previous_key(&w[1]), Ok(&w[0]));
  }
  assert_eq!(l.previous_key(&keys[0]), Err(Error::NoPredecessor));
  assert_eq!(l.next_key(&keys[keys.len() - 1]), Err(Error::NoSuccessor));

  let mut capped = SkipMap::with_options(Options::new().with_max_layers(4).with_grow_after(usize::MAX));
  capped.extend((0..N).map(|i| (i, ())));
  assert_eq!(capped.num_layers(), 4);
  assert!(capped.keys().all(|k| capped.height(k).unwrap() < 4));
}

use std::collections::BTreeMap;

use rand::{rngs::StdRng, Rng, SeedableRng};
use towerskl::{promote, Error, Options, Promote, SkipMap};

const SEEDS: [u64; 4] = [0, 7, 0xdead_beef, u64::MAX];

/// Compares every query of the map against a `BTreeMap` holding the same pairs.
fn check_against<K, V>(map: &SkipMap<K, V>, model: &BTreeMap<K, V>, probes: &[K])
where
  K: Ord + Promote + Clone + std::fmt::Debug,
  V: PartialEq + std::fmt::Debug,
{
  assert_eq!(map.len(), model.len());
  assert_eq!(map.all_keys_in_order(), model.keys().cloned().collect::<Vec<_>>());
  assert!(map.iter().eq(model.iter()));
  assert_eq!(map.first(), model.first_key_value());
  assert_eq!(map.last(), model.last_key_value());

  for k in probes {
    let Some(v) = model.get(k) else {
      assert_eq!(map.find(k), Err(Error::KeyNotFound));
      assert_eq!(map.next_key(k), Err(Error::KeyNotFound));
      assert_eq!(map.previous_key(k), Err(Error::KeyNotFound));
      continue;
    };

    assert_eq!(map.find(k), Ok(v));

    let next = model.range((std::ops::Bound::Excluded(k), std::ops::Bound::Unbounded)).next();
    match next {
      Some((n, _)) => assert_eq!(map.next_key(k), Ok(n)),
      None => assert_eq!(map.next_key(k), Err(Error::NoSuccessor)),
    }

    let prev = model.range(..k).next_back();
    match prev {
      Some((p, _)) => assert_eq!(map.previous_key(k), Ok(p)),
      None => assert_eq!(map.previous_key(k), Err(Error::NoPredecessor)),
    }

    assert_eq!(map.is_smallest_key(k), Ok(prev.is_none()));
    assert_eq!(map.is_largest_key(k), Ok(next.is_none()));
  }
}

#[test]
fn random_u64_keys_match_btree_map() {
  for seed in SEEDS {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = SkipMap::new();
    let mut model = BTreeMap::new();
    let mut probes = Vec::new();

    for _ in 0..2000 {
      // a narrow range so that duplicates show up
      let k: u64 = rng.random_range(0..4096);
      let v: u32 = rng.random();
      let inserted = map.insert(k, v);
      assert_eq!(inserted, !model.contains_key(&k));
      model.entry(k).or_insert(v);
      probes.push(k);
      probes.push(rng.random_range(0..4096));
    }

    check_against(&map, &model, &probes);
  }
}

#[test]
fn random_string_keys_match_btree_map() {
  for seed in SEEDS {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = SkipMap::new();
    let mut model = BTreeMap::new();
    let mut probes = Vec::new();

    for i in 0..500usize {
      let len = rng.random_range(0..6);
      let k: String = (0..len)
        .map(|_| rng.random_range(b'a'..=b'e') as char)
        .collect();
      map.insert(k.clone(), i);
      model.entry(k.clone()).or_insert(i);
      probes.push(k);
    }

    check_against(&map, &model, &probes);
  }
}

/// Replays the promotion rule without building any list.
fn expected_heights(keys: &[u64], opts: Options) -> (u32, BTreeMap<u64, u32>) {
  let mut layers = 2u32;
  let mut cap = opts.max_layers();
  let mut heights = BTreeMap::new();

  for &k in keys {
    if heights.contains_key(&k) {
      continue;
    }

    let len = heights.len() + 1;
    if len > opts.grow_after() {
      let log = usize::BITS - (len - 1).leading_zeros();
      cap = cap.max(3 * log + 1);
    }

    let mut flips = 0;
    while promote(&k, flips) && layers < cap {
      flips += 1;
      if flips == layers - 1 {
        layers += 1;
      }
    }
    heights.insert(k, flips + 1);
  }

  (layers, heights)
}

#[test]
fn heights_follow_promotion() {
  let presets = [
    Options::new(),
    Options::new().with_max_layers(5),
    Options::new().with_max_layers(4).with_grow_after(usize::MAX),
    Options::new().with_grow_after(0),
  ];

  for opts in presets {
    for seed in SEEDS {
      let mut rng = StdRng::seed_from_u64(seed);
      let keys: Vec<u64> = (0..1500).map(|_| rng.random_range(0..1 << 20)).collect();

      let mut map = SkipMap::with_options(opts);
      for &k in &keys {
        map.insert(k, ());
      }

      let (layers, heights) = expected_heights(&keys, opts);
      assert_eq!(map.num_layers(), layers, "{opts:?} seed {seed}");
      for (k, h) in heights {
        assert_eq!(map.height(&k), Ok(h), "{opts:?} seed {seed} key {k}");
      }
    }
  }
}

#[test]
fn same_input_same_shape() {
  let mut rng = StdRng::seed_from_u64(42);
  let keys: Vec<u32> = (0..1000).map(|_| rng.random()).collect();

  let a: SkipMap<u32, u8> = keys.iter().map(|&k| (k, k as u8)).collect();
  let b: SkipMap<u32, u8> = keys.iter().map(|&k| (k, k as u8)).collect();
  assert_eq!(a.dump().to_string(), b.dump().to_string());
}

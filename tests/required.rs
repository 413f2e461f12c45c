use towerskl::{Error, SkipMap};

#[test]
fn insert_then_find() {
  let mut map = SkipMap::new();
  map.insert(3u32, 5u32);
  assert_eq!(map.find(&3), Ok(&5));
}

#[test]
fn heights_of_small_keys() {
  let mut map = SkipMap::new();
  let expected = [1, 2, 1, 3, 1, 2, 1, 4, 1, 2];
  for i in 0..10u32 {
    map.insert(i, 100 + i);
  }
  for (i, h) in (0..10u32).zip(expected) {
    assert_eq!(map.height(&i), Ok(h), "key {i}");
  }
}

#[test]
fn next_key_walks_every_key() {
  let mut map = SkipMap::new();
  for i in 0..10u32 {
    map.insert(i, 100 + i);
  }
  assert_eq!(map.next_key(&0), Ok(&1));
  assert_eq!(map.next_key(&8), Ok(&9));
  assert_eq!(map.next_key(&9), Err(Error::NoSuccessor));
  for i in 0..9u32 {
    assert_eq!(map.next_key(&i), Ok(&(i + 1)));
  }
}

#[test]
fn two_insertions_add_two_layers() {
  let mut map = SkipMap::new();
  map.insert(3u32, 5u32);
  map.insert(5, 7);
  assert_eq!(map.num_layers(), 4);
}

#[test]
fn string_key_and_value() {
  let mut map = SkipMap::new();
  map.insert("Shindler".to_string(), "ICS 46".to_string());
  assert_eq!(map.find("Shindler").map(String::as_str), Ok("ICS 46"));
  assert_eq!(map.height("Shindler"), Ok(3));
}

#[test]
fn every_query_reports_missing_keys() {
  let mut map = SkipMap::new();
  for i in [10u32, 20, 30] {
    map.insert(i, ());
  }

  for k in [0u32, 15, 25, 40] {
    assert_eq!(map.find(&k), Err(Error::KeyNotFound));
    assert_eq!(map.height(&k), Err(Error::KeyNotFound));
    assert_eq!(map.next_key(&k), Err(Error::KeyNotFound));
    assert_eq!(map.previous_key(&k), Err(Error::KeyNotFound));
    assert_eq!(map.is_smallest_key(&k), Err(Error::KeyNotFound));
    assert_eq!(map.is_largest_key(&k), Err(Error::KeyNotFound));
  }

  assert_eq!(map.previous_key(&10), Err(Error::NoPredecessor));
  assert_eq!(map.previous_key(&20), Ok(&10));
  assert_eq!(map.next_key(&30), Err(Error::NoSuccessor));
  assert_eq!(map.is_smallest_key(&10), Ok(true));
  assert_eq!(map.is_largest_key(&30), Ok(true));
  assert_eq!(map.is_largest_key(&20), Ok(false));
}

#[test]
fn error_messages() {
  assert_eq!(
    Error::KeyNotFound.to_string(),
    "the key does not exist in the skip list"
  );
  assert_eq!(
    Error::NoSuccessor.to_string(),
    "the key is the largest key in the skip list"
  );
  assert_eq!(
    Error::NoPredecessor.to_string(),
    "the key is the smallest key in the skip list"
  );

  fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
  assert_error(Error::KeyNotFound);
}

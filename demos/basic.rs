use parking_lot::RwLock;
use std::sync::Arc;
use towerskl::SkipMap;

pub fn key(i: usize) -> String {
  format!("{:05}", i)
}

pub fn new_value(i: usize) -> String {
  format!("{:05}", i)
}

fn main() {
  const N: usize = 1000;

  // the map does no locking of its own
  let l = Arc::new(RwLock::new(SkipMap::new()));

  let handles: Vec<_> = (0..N)
    .map(|i| {
      let l = l.clone();
      std::thread::spawn(move || {
        assert!(l.write().insert(key(i), new_value(i)));
      })
    })
    .collect();
  handles.into_iter().for_each(|h| h.join().unwrap());

  let handles: Vec<_> = (0..N)
    .map(|i| {
      let l = l.clone();
      std::thread::spawn(move || {
        let k = key(i);
        let l = l.read();
        assert_eq!(l.find(k.as_str()), Ok(&new_value(i)), "broken: {i}");
      })
    })
    .collect();
  handles.into_iter().for_each(|h| h.join().unwrap());

  let l = l.read();
  assert_eq!(l.len(), N);
  println!(
    "{} keys across {} layers, cap {}",
    l.len(),
    l.num_layers(),
    l.max_layers()
  );
}

use integration::{big_value, key, new_value};
use towerskl::SkipMap;

fn main() {
  {
    const N: usize = 1000;
    let mut l = SkipMap::new();
    for i in (0..N).rev() {
      assert!(l.insert(key(i), new_value(i)));
    }
    for i in 0..N {
      let k = key(i);
      assert_eq!(l.find(k.as_str()), Ok(&new_value(i)), "broken: {i}");
    }
    assert_eq!(l.all_keys_in_order(), (0..N).map(key).collect::<Vec<_>>());
  }

  {
    const N2: usize = 100;
    let mut l = SkipMap::new();
    for i in 0..N2 {
      l.insert(key(i), big_value(i));
    }

    assert_eq!(N2, l.len());
    for i in 0..N2 {
      let k = key(i);
      assert_eq!(l.find(k.as_str()), Ok(&big_value(i)), "broken: {i}");
    }
  }
}

use towerskl::{Options, SkipMap};

fn main() {
  let mut map = SkipMap::new();
  for i in 0..10u32 {
    map.insert(i, 100 + i);
  }
  print!("{}", map.dump());

  for i in 0..10u32 {
    println!("height({i}) = {}", map.height(&i).unwrap());
  }

  // a cap of four layers keeps most keys on the base layer
  let capped: SkipMap<_, _> = {
    let mut map = SkipMap::with_options(Options::new().with_max_layers(4).with_grow_after(usize::MAX));
    map.extend((0..10u32).map(|i| (i, 100 + i)));
    map
  };
  println!();
  print!("{}", capped.dump());
}

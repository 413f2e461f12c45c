/// Only used for testing
pub fn key(i: usize) -> String {
  format!("{:05}", i)
}

/// Only used for testing
pub fn big_value(i: usize) -> String {
  let mut v = "0".repeat((1 << 20) - 5);
  v.push_str(&format!("{:05}", i));
  v
}

/// Only used for testing
pub fn new_value(i: usize) -> String {
  format!("{:05}", i)
}

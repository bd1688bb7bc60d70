//! Kidlearn library exports for the binary and for testing

pub mod core;
pub mod pronounce;
pub mod tui;

#[cfg(test)]
pub mod test_support;

//! Document model tests

pub mod tests_clone;

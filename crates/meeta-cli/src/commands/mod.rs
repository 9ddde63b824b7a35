//! Run modes of the proxy binary.

pub mod proxy;
pub mod selftest;

//! Low-level peripheral helpers.

pub mod hw_init;

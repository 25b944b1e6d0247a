//! Common, shared types.

pub mod components;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;

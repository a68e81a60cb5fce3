
//! Various utility functions.

pub mod point;

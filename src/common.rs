//! Defines some common functions used in this library.

pub(crate) mod utils;

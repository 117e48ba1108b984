//! Graph algorithms
mod coloring;
pub use self::coloring::*;

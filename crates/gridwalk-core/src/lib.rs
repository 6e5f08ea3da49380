//! **gridwalk-core**: geometry primitives shared by the *gridwalk* crates.
//!
//! A search state on a grid is a [`Point`].

pub mod geom;

pub use geom::Point;

//! Command implementations.

pub mod chapters;
pub mod check;
pub mod features;
pub mod serve;
pub mod typist;

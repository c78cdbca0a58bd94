//! File name handling for written output.

pub mod filename;

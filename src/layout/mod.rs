// src/layout/mod.rs
pub mod assembler;

pub use assembler::{Revisi2Layout, Revision};

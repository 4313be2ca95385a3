#![doc = include_str!("../README.md")]

mod chunk;
mod chunk_id;
mod error;
mod walker;

pub use chunk::*;
pub use chunk_id::*;
pub use error::*;
pub use walker::*;

pub use aiffmid_common::read::{Seekable, Skip, Streamed};

#![doc = include_str!("../README.md")]

mod base36;
mod binary;
mod builder;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::base36::*;
pub use crate::binary::*;
pub use crate::builder::*;
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;

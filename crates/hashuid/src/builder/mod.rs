mod hash_uid;
mod hasher;
mod interface;

pub use hash_uid::*;
pub use hasher::*;
pub use interface::*;

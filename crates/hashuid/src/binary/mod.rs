mod hash_uid;
mod interface;
mod stream;

pub use interface::*;

mod extra;
mod hash_uid;
mod interface;
mod order;

pub use extra::*;
pub use hash_uid::*;
pub use interface::*;
pub use order::*;

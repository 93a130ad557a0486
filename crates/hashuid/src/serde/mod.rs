mod hash_uid;
mod with;

pub use with::*;

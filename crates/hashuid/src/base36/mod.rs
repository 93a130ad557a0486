mod error;
mod interface;
mod radix;

pub use error::*;
pub use interface::*;
use radix::*;

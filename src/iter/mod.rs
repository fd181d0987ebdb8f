mod owned_iter;
mod overlaps;
mod ref_iter;

pub use owned_iter::*;
pub use overlaps::*;
pub use ref_iter::*;

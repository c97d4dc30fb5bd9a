pub mod drip;
pub mod initialize;

pub use drip::*;
pub use initialize::*;

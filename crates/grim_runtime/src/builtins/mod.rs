pub(super) mod math;

pub use math::*;

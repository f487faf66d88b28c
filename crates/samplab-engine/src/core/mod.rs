pub use self::{geometry::*, histogram::*, rng::*};

pub(crate) mod geometry;
pub(crate) mod histogram;
pub(crate) mod rng;

mod curve;

pub use curve::{QuadSegment, StrokePath};

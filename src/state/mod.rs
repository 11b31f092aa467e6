pub mod correction;
pub mod geometry;
pub mod gesture;

pub use correction::{corrected_pan, SNAP_EPSILON};
pub use geometry::{compute_constraints, Constraints, Dimensions, Pan};
pub use gesture::DragState;

pub mod direction;
pub mod point;
pub mod point3d;

pub use direction::Direction;
pub use point::Point2D;
pub use point3d::Point3D;

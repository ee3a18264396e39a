pub mod basis_points;

pub use basis_points::BasisPoints;

//! Shared value types used by both the editor shell and window placement.

pub mod geometry;

pub use geometry::Geometry;

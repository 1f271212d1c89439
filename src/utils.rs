//! Small helpers that don't belong to any one algorithmic layer.

pub mod secure_zero;

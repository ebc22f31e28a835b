//! Reusable widget helpers.

pub mod styling;

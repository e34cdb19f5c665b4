// src/models/mod.rs
pub mod merton;
pub mod model;
pub mod poisson;

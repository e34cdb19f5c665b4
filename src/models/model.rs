// src/models/model.rs
use crate::error::SimResult;
use crate::grid::TimeGrid;
use rand::Rng;

/// A model that turns a parameter record plus a random source into a path ensemble.
pub trait PathGenerator {
    type Ensemble;

    /// Reject parameters outside the model's domain
    fn validate(&self) -> SimResult<()>;

    fn grid(&self) -> SimResult<TimeGrid>;

    /// Validate, then run the forward recursion over all paths
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SimResult<Self::Ensemble>;
}

/// Randomized placement loop with terminal outcome reporting
pub mod generator;
/// Pluggable tile-selection and point-placement strategies
pub mod strategy;
/// Adjacency validation for candidate placements
pub mod validator;

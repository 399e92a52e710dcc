pub mod classifier;
pub mod patterns;
pub mod renamer;

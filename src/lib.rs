pub mod geometry;
pub mod invasion;
pub mod scores;
pub mod settings;
pub mod stats;

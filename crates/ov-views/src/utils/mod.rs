//! Color and statistics helpers shared by the views

pub mod colors;
pub mod stats;

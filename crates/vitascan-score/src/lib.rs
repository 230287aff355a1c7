//! Vitascan Score — maps free text to the five OCEAN personality
//! dimensions with fixed, hand-authored keyword lexicons.

pub mod job;
pub mod lexicon;
pub mod resume;

pub use job::ideal_personality;
pub use resume::analyze_personality;

//! Presentation helpers that sit outside the cipher engine.

pub mod grouping;

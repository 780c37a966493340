//! Systems that evolve the world. Wireworld is the only rule set.

pub mod automaton;

pub use automaton::{AutomatonEngine, StepReport};

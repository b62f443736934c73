//! Calculator core: key tokens, the arithmetic evaluator and the accumulator
//! state machine. Nothing in here knows about the terminal.

pub mod engine;
pub mod evaluator;
pub mod format;
pub mod key;

pub use engine::{Calculation, CalculatorState};
pub use key::{Key, Operator};

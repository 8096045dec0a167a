pub mod config;
pub mod display;
pub mod error;
pub mod grader;
pub mod roster;
pub mod selection;
pub mod tactic;
// cmd and reports are modules of the binary crate (main).

pub mod roster;
pub mod tactic;
pub mod validate;

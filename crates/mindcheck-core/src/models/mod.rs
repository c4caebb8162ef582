pub mod answers;
pub mod conditions;
pub mod risk;
pub mod screening;
pub mod triage;

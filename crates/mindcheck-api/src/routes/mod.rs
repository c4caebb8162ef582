pub mod health;
pub mod insights;
pub mod questionnaires;
pub mod screenings;
pub mod triage;

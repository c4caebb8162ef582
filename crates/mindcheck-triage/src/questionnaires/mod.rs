pub mod initial_screening;
pub mod social_function;

pub mod health;
pub mod teachers;

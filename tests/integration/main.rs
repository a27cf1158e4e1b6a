#[path = "../common/mod.rs"]
pub mod common;

mod form;
mod health;
mod teachers;

pub mod form;
pub mod teachers;

pub mod calculation;
pub mod catalog;

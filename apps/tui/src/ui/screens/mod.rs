pub mod catalog;
pub mod help;

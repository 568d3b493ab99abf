pub mod fields;
pub mod file;
pub mod stdin;

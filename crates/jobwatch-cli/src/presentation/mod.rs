pub mod console;
pub mod json;
pub mod summary;

pub mod client;
pub mod note;
pub mod project;
pub mod summary;

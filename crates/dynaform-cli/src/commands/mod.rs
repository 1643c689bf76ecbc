pub mod empty;
pub mod render;
pub mod submit;

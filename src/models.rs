pub mod block;
pub mod json;

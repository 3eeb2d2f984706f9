pub mod download;
pub mod index;

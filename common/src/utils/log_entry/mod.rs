pub mod access;
pub mod system;

pub mod access_gate;
pub mod utils;

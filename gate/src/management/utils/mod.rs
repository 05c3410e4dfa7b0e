pub mod access_decision;

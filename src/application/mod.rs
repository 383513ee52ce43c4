pub mod copy;
pub mod service;

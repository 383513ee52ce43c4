pub mod a1_notation;
pub mod column;
pub mod range_address;

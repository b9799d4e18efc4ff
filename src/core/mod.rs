pub mod aggregate;
pub mod guard;
pub mod reconstruct;

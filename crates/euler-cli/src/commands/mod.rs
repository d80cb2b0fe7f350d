pub mod list;
pub mod solve;

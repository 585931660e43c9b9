pub mod codes;
pub mod rank;

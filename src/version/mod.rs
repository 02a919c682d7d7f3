pub mod calculate;
pub mod select;

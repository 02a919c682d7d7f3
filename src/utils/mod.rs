pub mod logger;
pub mod signature;
pub mod spinner;
pub mod version;

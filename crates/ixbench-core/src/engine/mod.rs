pub mod driver;
pub mod procedure;

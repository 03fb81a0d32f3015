pub mod angle;
pub mod extract;
pub mod table;

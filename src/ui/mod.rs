pub mod panels;
pub mod tables;

pub mod admission;
pub mod employee;
pub mod health;

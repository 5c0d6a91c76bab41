pub mod contributors;
pub mod health;

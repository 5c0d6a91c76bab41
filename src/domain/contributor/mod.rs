pub mod entity;
pub mod errors;
pub mod ordering;
pub mod repository;

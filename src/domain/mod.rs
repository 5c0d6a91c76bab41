pub mod contributor;

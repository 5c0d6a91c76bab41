pub mod get_contributors;

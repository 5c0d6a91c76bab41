pub mod http_contributor_source;

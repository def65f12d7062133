pub mod bundled_spec;
pub mod documents;
pub mod file_source;
pub mod parsers;

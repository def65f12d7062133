pub mod document_parser;

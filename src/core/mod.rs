pub mod engine;
pub mod matcher;
pub mod resolver;
pub mod resource;
pub mod text_table;
pub mod tokenizer;

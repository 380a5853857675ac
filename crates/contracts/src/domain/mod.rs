//! DTO для обмена с RAG backend

pub mod a001_document;
pub mod a002_query;

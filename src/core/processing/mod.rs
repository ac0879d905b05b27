pub mod bbox;
pub mod chroma_key;

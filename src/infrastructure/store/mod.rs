pub mod embedding_file;

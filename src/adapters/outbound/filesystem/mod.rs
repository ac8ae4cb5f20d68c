/// Filesystem adapters for local index reading and recipe writing
mod file_reader;
mod file_writer;

pub use file_reader::LocalIndexReader;
pub use file_writer::FileSystemRecipeWriter;

pub mod session;
pub mod table_reader;

pub use session::Session;
pub use table_reader::TableReader;

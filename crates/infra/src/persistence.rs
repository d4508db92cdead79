pub mod csv_reader;
pub mod file_reader;

pub use csv_reader::{load_users, read_users};
pub use file_reader::FileReader;

pub mod csv_table;
pub mod dictionary;
pub mod error;

pub use csv_table::CsvTable;
pub use dictionary::load_data_dictionary;
pub use error::IngestError;

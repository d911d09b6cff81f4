pub mod csv_processor;
pub mod translation;
pub mod utils;

pub use csv_processor::{AtomicCsvWriter, CsvTableReader, FillReport, RowTransformer, TransformOptions};
pub use translation::{fill_translations, load_dictionary, run, MatchPolicy, TranslationDictionary};
pub use utils::{AppConfig, FillError, Result};

pub mod reader;
pub mod transform;
pub mod writer;

pub use reader::{file_exists, parse_records, read_records, strip_bom, CsvTableReader, UTF8_BOM};
pub use transform::{FillReport, RowOutcome, RowTransformer, TransformOptions, MIN_DATA_COLUMNS};
pub use writer::AtomicCsvWriter;

pub mod builtin;
pub mod dictionary;

pub use dictionary::{MatchPolicy, TranslationDictionary};

use crate::csv_processor::{AtomicCsvWriter, CsvTableReader, FillReport, RowTransformer, TransformOptions};
use crate::utils::{AppConfig, DictionaryConfig, Result};
use std::path::Path;

/// Builtin entries, then the optional extra CSV on top.
pub fn load_dictionary(config: &DictionaryConfig) -> Result<TranslationDictionary> {
    let mut dictionary = TranslationDictionary::builtin();

    if let Some(extra) = &config.extra_path {
        let added = dictionary.extend_from_csv(extra)?;
        tracing::info!(path = %extra.display(), entries = added, "Loaded extra dictionary");
    }

    Ok(dictionary)
}

/// Reads `input` whole, fills missing translations and replaces `output`.
///
/// `input` and `output` may be the same file. Nothing is written unless the
/// full table was read and transformed.
pub fn fill_translations(
    input: &Path,
    output: &Path,
    dictionary: &TranslationDictionary,
    options: TransformOptions,
) -> Result<FillReport> {
    let reader = CsvTableReader::new(input);
    let records = reader.read_all()?;

    let transformer = RowTransformer::new(dictionary, options);
    let (rows, report) = transformer.transform_all(&records);

    let mut writer = AtomicCsvWriter::new(output);
    writer.initialize()?;
    writer.write_rows(&rows)?;
    let rows_written = writer.finish()?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        rows_written,
        filled = report.filled,
        preserved = report.preserved,
        untranslated = report.untranslated,
        passed_through = report.passed_through,
        "Translations filled"
    );

    Ok(report)
}

pub fn run(config: &AppConfig) -> Result<FillReport> {
    let dictionary = load_dictionary(&config.dictionary)?;
    tracing::info!(
        entries = dictionary.len(),
        policy = %config.transform.match_policy,
        "Dictionary ready"
    );

    fill_translations(
        &config.files.input,
        config.files.output_path(),
        &dictionary,
        TransformOptions::from(&config.transform),
    )
}

use crate::translation::{MatchPolicy, TranslationDictionary};
use crate::utils::TransformConfig;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

const CODE_COL: usize = 0;
const PAGE_COL: usize = 1;
const SOURCE_COL: usize = 2;
const TARGET_COL: usize = 3;

/// Data rows narrower than this are written back verbatim.
pub const MIN_DATA_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    pub header_rows: usize,
    pub match_policy: MatchPolicy,
    pub strip_source_quotes: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::from(&TransformConfig::default())
    }
}

impl From<&TransformConfig> for TransformOptions {
    fn from(config: &TransformConfig) -> Self {
        Self {
            header_rows: config.header_rows,
            match_policy: config.match_policy,
            strip_source_quotes: config.strip_source_quotes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Header,
    /// An existing translation was kept.
    Preserved,
    Filled,
    /// No existing translation and no dictionary hit.
    Untranslated,
    /// Fewer than [`MIN_DATA_COLUMNS`] fields.
    PassedThrough,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    pub total_rows: usize,
    pub header_rows: usize,
    pub filled: usize,
    pub preserved: usize,
    pub untranslated: usize,
    pub passed_through: usize,
}

impl FillReport {
    pub fn record(&mut self, outcome: RowOutcome) {
        self.total_rows += 1;
        match outcome {
            RowOutcome::Header => self.header_rows += 1,
            RowOutcome::Preserved => self.preserved += 1,
            RowOutcome::Filled => self.filled += 1,
            RowOutcome::Untranslated => self.untranslated += 1,
            RowOutcome::PassedThrough => self.passed_through += 1,
        }
    }

    pub fn data_rows(&self) -> usize {
        self.total_rows - self.header_rows
    }
}

pub struct RowTransformer<'a> {
    dictionary: &'a TranslationDictionary,
    options: TransformOptions,
}

impl<'a> RowTransformer<'a> {
    pub fn new(dictionary: &'a TranslationDictionary, options: TransformOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// Rewrites one data row as `code, page, source, target`.
    ///
    /// Any fields after the target column are dropped. Quoting of fields that
    /// contain delimiters is left to the CSV writer.
    pub fn transform_row(&self, record: &StringRecord) -> (StringRecord, RowOutcome) {
        if record.len() < MIN_DATA_COLUMNS {
            return (record.clone(), RowOutcome::PassedThrough);
        }

        let code = &record[CODE_COL];
        let page = &record[PAGE_COL];
        let source = if self.options.strip_source_quotes {
            record[SOURCE_COL].trim_matches('"')
        } else {
            &record[SOURCE_COL]
        };
        let existing = record.get(TARGET_COL).unwrap_or("");

        let (target, outcome) = if !existing.trim().is_empty() {
            (existing, RowOutcome::Preserved)
        } else {
            match self.dictionary.translate(source, self.options.match_policy) {
                "" => ("", RowOutcome::Untranslated),
                found => (found, RowOutcome::Filled),
            }
        };

        if outcome == RowOutcome::Untranslated {
            tracing::debug!(code, page, source, "No translation found");
        }

        (StringRecord::from(vec![code, page, source, target]), outcome)
    }

    pub fn transform_all(&self, records: &[StringRecord]) -> (Vec<StringRecord>, FillReport) {
        let mut report = FillReport::default();
        let mut output = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            if i < self.options.header_rows {
                report.record(RowOutcome::Header);
                output.push(record.clone());
                continue;
            }

            let (row, outcome) = self.transform_row(record);
            report.record(outcome);
            output.push(row);
        }

        (output, report)
    }
}

use crate::csv_processor::read_records;
use crate::translation::builtin::BUILTIN_ENTRIES;
use crate::utils::{FillError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// How a source string that is not a dictionary key is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// The first inserted key contained in the source string wins.
    #[default]
    #[serde(rename = "substring")]
    Substring,
    /// Only exact keys translate; anything else stays empty.
    #[serde(rename = "exact")]
    ExactOnly,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::Substring => write!(f, "substring"),
            MatchPolicy::ExactOnly => write!(f, "exact"),
        }
    }
}

/// Source → target lookup table that remembers insertion order.
///
/// Re-inserting an existing key replaces its value but keeps the position it
/// was first inserted at, so substring tie-breaks stay stable.
#[derive(Debug, Clone, Default)]
pub struct TranslationDictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TranslationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.iter().copied())
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (source, target) in entries {
            dictionary.insert(source, target);
        }
        dictionary
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let source = source.into();
        let target = target.into();

        match self.index.get(&source) {
            Some(&position) => self.entries[position].1 = target,
            None => {
                self.index.insert(source.clone(), self.entries.len());
                self.entries.push((source, target));
            }
        }
    }

    /// Layers a headerless `source,target` CSV over the current entries.
    pub fn extend_from_csv(&mut self, path: &Path) -> Result<usize> {
        let records = read_records(path)?;
        let mut added = 0;

        for (i, record) in records.iter().enumerate() {
            let line = i + 1;
            if record.is_empty() {
                continue;
            }
            let (Some(source), Some(target)) = (record.get(0), record.get(1)) else {
                return Err(FillError::DictionaryError(format!(
                    "{}:{}: expected `source,target`, got {} field(s)",
                    path.display(),
                    line,
                    record.len()
                )));
            };

            if source.trim().is_empty() {
                tracing::warn!(path = %path.display(), line, "Skipping dictionary entry with blank source");
                continue;
            }

            self.insert(source, target);
            added += 1;
        }

        Ok(added)
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.index
            .get(source)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn lookup(&self, source: &str, policy: MatchPolicy) -> Option<&str> {
        if source.trim().is_empty() {
            return None;
        }

        if let Some(target) = self.get(source) {
            return Some(target);
        }

        match policy {
            MatchPolicy::ExactOnly => None,
            MatchPolicy::Substring => self
                .entries
                .iter()
                .find(|(key, _)| source.contains(key.as_str()))
                .map(|(_, target)| target.as_str()),
        }
    }

    /// Like [`lookup`](Self::lookup), but an unknown source yields `""`.
    pub fn translate(&self, source: &str, policy: MatchPolicy) -> &str {
        self.lookup(source, policy).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample() -> TranslationDictionary {
        TranslationDictionary::from_entries([
            ("기념일", "Anniversary"),
            ("기념일 추가", "Add Anniversary"),
            ("추가", "Add"),
        ])
    }

    #[test]
    fn test_exact_match_has_priority() {
        let dict = sample();
        assert_eq!(dict.translate("기념일 추가", MatchPolicy::Substring), "Add Anniversary");
        assert_eq!(dict.translate("기념일 추가", MatchPolicy::ExactOnly), "Add Anniversary");
    }

    #[test]
    fn test_first_inserted_substring_wins() {
        let dict = sample();
        assert_eq!(dict.translate("새 기념일 추가하기", MatchPolicy::Substring), "Anniversary");
        assert_eq!(dict.translate("사진 추가", MatchPolicy::Substring), "Add");
    }

    #[test]
    fn test_exact_only_ignores_substrings() {
        let dict = sample();
        assert_eq!(dict.translate("새 기념일 추가하기", MatchPolicy::ExactOnly), "");
    }

    #[test]
    fn test_blank_source_is_empty() {
        let dict = sample();
        assert_eq!(dict.lookup("", MatchPolicy::Substring), None);
        assert_eq!(dict.lookup("   \t", MatchPolicy::Substring), None);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(sample().translate("안녕하세요", MatchPolicy::Substring), "");
    }

    #[test]
    fn test_duplicate_key_overwrites_value_keeps_position() {
        let mut dict = TranslationDictionary::from_entries([("가", "first"), ("나", "second")]);
        dict.insert("가", "replaced");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("가"), Some("replaced"));
        assert_eq!(dict.translate("나가", MatchPolicy::Substring), "replaced");
        let keys: Vec<&str> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["가", "나"]);
    }

    #[test]
    fn test_builtin_table() {
        let dict = TranslationDictionary::builtin();
        assert_eq!(dict.len(), BUILTIN_ENTRIES.len());
        assert_eq!(dict.get("기념일"), Some("Anniversary"));
        assert_eq!(dict.get("커피, 차, 주스 등"), Some("Coffee, tea, juice, etc."));
        assert_eq!(dict.translate("안녕하세요", MatchPolicy::Substring), "");
    }

    #[test]
    fn test_builtin_includes_older_table() {
        let dict = TranslationDictionary::builtin();
        assert_eq!(dict.translate("날짜", MatchPolicy::ExactOnly), "Date");
        assert_eq!(dict.translate("예: INFP", MatchPolicy::ExactOnly), "Example: INFP");
        assert_eq!(dict.translate("좋아하는 것 목록", MatchPolicy::ExactOnly), "Favorite List");
        // Newer wording wins where both tables define the key.
        assert_eq!(dict.get("추억"), Some("Memories"));
        // Newer keys stay ahead in substring order.
        assert_eq!(dict.translate("좋아하는 것 목록 보기", MatchPolicy::Substring), "Favorites");
    }

    #[test]
    fn test_extend_from_csv() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\u{feff}안녕하세요,Hello\n\n기념일,Special Day\n,ignored\n\" \",space\n").unwrap();

        let mut dict = TranslationDictionary::builtin();
        let before = dict.len();
        let added = dict.extend_from_csv(file.path()).unwrap();

        assert_eq!(added, 2);
        assert_eq!(dict.len(), before + 1);
        assert_eq!(dict.get("안녕하세요"), Some("Hello"));
        assert_eq!(dict.get("기념일"), Some("Special Day"));
        assert_eq!(dict.get(" "), None);
        assert_eq!(dict.translate("없는 말", MatchPolicy::Substring), "");
    }

    #[test]
    fn test_extend_from_csv_rejects_single_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "혼자").unwrap();

        let err = TranslationDictionary::new()
            .extend_from_csv(file.path())
            .unwrap_err();
        assert!(matches!(err, FillError::DictionaryError(_)));
    }

    #[test]
    fn test_policy_deserializes_from_config_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: MatchPolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"exact\"").unwrap();
        assert_eq!(w.policy, MatchPolicy::ExactOnly);
        assert_eq!(MatchPolicy::Substring.to_string(), "substring");
    }
}

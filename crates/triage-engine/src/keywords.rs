//! Ordered keyword matching over symptom text

use aho_corasick::AhoCorasick;
use triage_core::{Error, Result};

/// An ordered list of keywords compiled into one Aho-Corasick automaton.
///
/// Matches are reported by position in the list, never by position in the
/// text. Keywords are lower-cased at construction; callers pass text that is
/// already lower-cased.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

impl KeywordSet {
    /// Compile a keyword list. Rejects empty and duplicate keywords.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled: Vec<String> = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            if keyword.trim().is_empty() {
                return Err(Error::config("keyword must not be empty"));
            }
            if compiled.contains(&keyword) {
                return Err(Error::config(format!("duplicate keyword '{}'", keyword)));
            }
            compiled.push(keyword);
        }

        let matcher = AhoCorasick::new(&compiled)
            .map_err(|e| Error::config(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            keywords: compiled,
            matcher,
        })
    }

    /// Every keyword present in `text`, each once, in list order
    pub fn all_matches(&self, text: &str) -> Vec<&str> {
        let mut hit = vec![false; self.keywords.len()];
        for m in self.matcher.find_overlapping_iter(text) {
            hit[m.pattern().as_usize()] = true;
        }

        self.keywords
            .iter()
            .zip(hit)
            .filter_map(|(keyword, hit)| hit.then_some(keyword.as_str()))
            .collect()
    }

    /// The earliest keyword in list order that is present in `text`
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.matcher
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .min()
            .map(|idx| self.keywords[idx].as_str())
    }

    /// Compiled keywords in list order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

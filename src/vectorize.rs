use std::collections::HashMap;

use ndarray::Array2;
use tracing::{Level, span, debug};

/// Token-count vectorizer over a vocabulary shared by every document.
///
/// Tokens are whitespace-delimited and case-sensitive, applied uniformly to
/// all documents. Columns are assigned in first-seen token order, so the same
/// document sequence always produces the same matrix.
#[derive(Debug, Default)]
pub struct CountVectorizer {
  vocabulary: HashMap<String, usize>
}

impl CountVectorizer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Learn the vocabulary from `documents` and return the count matrix,
  /// one row per document, one column per distinct token.
  pub fn fit_transform<S>(&mut self, documents: &[S]) -> Array2<f32>
    where S: AsRef<str> {
    let span = span!(Level::DEBUG, "count-vectorize");
    let _guard = span.enter();
    self.vocabulary.clear();
    for document in documents {
      for token in document.as_ref().split_whitespace() {
        let next_column = self.vocabulary.len();
        self.vocabulary.entry(token.to_owned()).or_insert(next_column);
      }
    }
    debug!("Learned vocabulary of {} tokens from {} documents",
      self.vocabulary.len(), documents.len());
    let mut counts = Array2::<f32>::zeros((documents.len(), self.vocabulary.len()));
    for (row, document) in documents.iter().enumerate() {
      for token in document.as_ref().split_whitespace() {
        if let Some(&column) = self.vocabulary.get(token) {
          counts[[row, column]] += 1.0;
        }
      }
    }
    counts
  }

  pub fn vocabulary_len(&self) -> usize {
    self.vocabulary.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_repeated_tokens() {
    let mut vectorizer = CountVectorizer::new();
    let counts = vectorizer.fit_transform(&["action action hero"]);
    assert_eq!(counts.shape(), &[1, 2]);
    let row: Vec<f32> = counts.row(0).to_vec();
    assert!(row.contains(&2.0));
    assert!(row.contains(&1.0));
  }

  #[test]
  fn vocabulary_is_shared_across_documents() {
    let mut vectorizer = CountVectorizer::new();
    let counts = vectorizer.fit_transform(&["action hero", "hero battle"]);
    assert_eq!(vectorizer.vocabulary_len(), 3);
    assert_eq!(counts.shape(), &[2, 3]);
  }

  #[test]
  fn tokens_are_case_sensitive() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit_transform(&["Action action"]);
    assert_eq!(vectorizer.vocabulary_len(), 2);
  }

  #[test]
  fn empty_documents_yield_zero_rows() {
    let mut vectorizer = CountVectorizer::new();
    let counts = vectorizer.fit_transform(&["", "   "]);
    assert_eq!(counts.shape(), &[2, 0]);
  }

  #[test]
  fn no_documents_yield_empty_matrix() {
    let mut vectorizer = CountVectorizer::new();
    let documents: Vec<&str> = Vec::new();
    let counts = vectorizer.fit_transform(&documents);
    assert_eq!(counts.shape(), &[0, 0]);
  }

  #[test]
  fn refitting_replaces_the_vocabulary() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit_transform(&["one two three"]);
    vectorizer.fit_transform(&["four"]);
    assert_eq!(vectorizer.vocabulary_len(), 1);
  }
}

use ndarray::{Array2, ArrayView1};
use tracing::{Level, span, debug};

use super::catalog::Catalog;
use super::vectorize::CountVectorizer;

/// Pairwise cosine similarity between catalog items, indexed by catalog
/// position. Square, symmetric, entries in `[0.0, 1.0]`, diagonal fixed at
/// `1.0`. Built once per catalog snapshot and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
  scores: Array2<f32>
}

impl SimilarityMatrix {
  /// Vectorize every item's combined features and compute all pairwise
  /// similarities. An empty catalog yields a 0x0 matrix.
  pub fn from_catalog(catalog: &Catalog) -> Self {
    let documents = catalog.iter()
      .map(|item| item.combined_features())
      .collect::<Vec<&str>>();
    let counts = CountVectorizer::new().fit_transform(&documents);
    Self::from_counts(&counts)
  }

  /// Compute similarities from a row-per-item count matrix.
  pub fn from_counts(counts: &Array2<f32>) -> Self {
    let span = span!(Level::DEBUG, "cosine-similarity");
    let _guard = span.enter();
    let n_items = counts.nrows();
    let norms = counts.rows()
      .into_iter()
      .map(|row| row.dot(&row).sqrt())
      .collect::<Vec<f32>>();
    let mut scores = Array2::<f32>::zeros((n_items, n_items));
    for i in 0..n_items {
      scores[[i, i]] = 1.0;
      for j in (i + 1)..n_items {
        let score = cosine(counts.row(i), counts.row(j), norms[i], norms[j]);
        scores[[i, j]] = score;
        scores[[j, i]] = score;
      }
    }
    debug!("Computed {0}x{0} similarity matrix", n_items);
    Self { scores }
  }

  pub fn get(&self, i: usize, j: usize) -> f32 {
    self.scores[[i, j]]
  }

  /// `(position, score)` pairs for one item's row, in catalog order.
  pub fn row_scores(&self, index: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
    self.scores.row(index)
      .to_vec()
      .into_iter()
      .enumerate()
  }

  /// Number of items the matrix was built over.
  pub fn len(&self) -> usize {
    self.scores.nrows()
  }

  pub fn is_empty(&self) -> bool {
    self.scores.nrows() == 0
  }
}

fn cosine(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>, norm_a: f32, norm_b: f32) -> f32 {
  if norm_a == 0.0 || norm_b == 0.0 {
    return 0.0;
  }
  // Counts are non-negative, so the cosine lands in [0, 1]; min() clamps
  // floating-point drift above 1.
  (a.dot(&b) / (norm_a * norm_b)).min(1.0)
}

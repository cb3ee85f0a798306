use serde::Serialize;

use super::Recommendation;

/// Recommendations ordered by descending score. Ties keep the order the
/// candidates were supplied in (catalog position for row scans), so repeated
/// runs over the same snapshot rank identically.
#[derive(Debug, Serialize)]
pub struct RecommendationList<K>(pub Vec<Recommendation<K>>);

impl<K> RecommendationList<K> {

  pub fn new_with_sort(mut recs: Vec<Recommendation<K>>) -> Self {
    recs.sort_by(|this, other| {
        other.score.total_cmp(&this.score)
      }
    );
    Self(recs)
  }

  pub fn from_iter<I>(value: I) -> Self
    where I: IntoIterator,
          I::Item: Into<Recommendation<K>> {
    Self(value.into_iter()
      .map(|item| item.into())
      .collect::<Vec<Recommendation<K>>>())
  }

  pub fn from_iter_with_sort<I>(value: I) -> Self
    where I: IntoIterator,
          I::Item: Into<Recommendation<K>> {
    let recs = value.into_iter()
      .map(|item| item.into())
      .collect::<Vec<Recommendation<K>>>();
    Self::new_with_sort(recs)
  }

  /// Keep the `n` highest-ranked entries.
  pub fn take_top(mut self, n: usize) -> Self {
    self.0.truncate(n);
    self
  }

  pub fn into_ids(self) -> Vec<K> {
    self.0.into_iter()
      .map(|rec| rec.item_id)
      .collect()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Recommendation<K>> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<K> From<RecommendationList<K>> for Vec<Recommendation<K>> {
  fn from(value: RecommendationList<K>) -> Self {
    value.0
  }
}

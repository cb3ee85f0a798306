use tracing::{Level, span, debug, trace};

use super::{
  Recommendation,
  Recommender,
  RecommendError,
  RecommendationList,
  catalog::{Catalog, ItemRecord},
  similarity::SimilarityMatrix
};

/// How many titles a recommendation page holds unless the caller asks for a
/// different count.
pub const DEFAULT_RECOMMENDATIONS: u16 = 10;

/// Ranks catalog items by cosine similarity of their combined descriptive
/// features. Owns one immutable catalog snapshot and the similarity matrix
/// computed from it; a new snapshot means building a new recommender.
pub struct ContentRecommender {
  catalog: Catalog,
  similarity: SimilarityMatrix
}

impl ContentRecommender {
  fn new(catalog: Catalog, similarity: SimilarityMatrix) -> Self {
    Self { catalog, similarity }
  }

  pub fn builder() -> ContentRecommenderBuilder {
    ContentRecommenderBuilder::default()
  }

  /// Build directly from an already-assembled catalog snapshot.
  pub fn from_catalog(catalog: Catalog) -> Self {
    let similarity = SimilarityMatrix::from_catalog(&catalog);
    Self::new(catalog, similarity)
  }

  /// The default-sized page of most similar titles, best match first.
  pub fn similar_titles(&self, title: &str) -> Result<Vec<String>, RecommendError> {
    self.recommend(title, DEFAULT_RECOMMENDATIONS)
      .map(RecommendationList::into_ids)
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn similarity(&self) -> &SimilarityMatrix {
    &self.similarity
  }
}

impl Recommender<str, String> for ContentRecommender {
  fn recommend(&self, title: &str, n_items: u16)
      -> Result<RecommendationList<String>, RecommendError> {
    let span = span!(Level::DEBUG, "content-recommend");
    let _guard = span.enter();
    debug!("Locating \"{}\" in catalog", title);
    let subject = self.catalog.position_of(title)
      .ok_or_else(|| RecommendError::NotFound(title.to_owned()))?;
    trace!("Scanning similarity row {}", subject);
    let neighbors = self.similarity.row_scores(subject)
      .filter(|(position, _)| *position != subject)
      .filter_map(|(position, score)| {
        self.catalog.get(position)
          .map(|item| (item.title.clone(), score))
      })
      .map(Recommendation::from);
    let recs = RecommendationList::from_iter_with_sort(neighbors)
      .take_top(n_items as usize);
    trace!("Returning {} recommendations", recs.len());
    Ok(recs)
  }
}

#[derive(Builder)]
#[builder(name = "ContentRecommenderBuilder", pattern = "owned", public, build_fn(skip))]
#[allow(dead_code)]
pub struct ContentRecommenderArguments {
  records: Vec<ItemRecord>
}

impl ContentRecommenderBuilder {
  pub fn build(self) -> Result<ContentRecommender, ContentRecommenderBuilderError> {
    let span = span!(Level::DEBUG, "content-init");
    let _guard = span.enter();
    let records = Self::unwrap_field(self.records, "records")?;
    debug!("Building catalog of {} records", records.len());
    let catalog = Catalog::from_records(records);
    let similarity = SimilarityMatrix::from_catalog(&catalog);
    Ok(ContentRecommender::new(catalog, similarity))
  }

  fn unwrap_field<T>(val: Option<T>, name: &'static str) -> Result<T, ContentRecommenderBuilderError> {
    val.ok_or(ContentRecommenderBuilderError::UninitializedField(name))
  }
}

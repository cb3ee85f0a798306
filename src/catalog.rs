use serde::{Deserialize, Serialize};
use tracing::{Level, span, debug};

/// One raw item as handed over by an upstream metadata source, e.g. a movie
/// with its genre, cast and keyword lists already resolved. Sparse payloads
/// are fine: every descriptive field defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemRecord {
  pub id: u64,
  pub title: String,
  #[serde(default)]
  pub genres: Vec<String>,
  #[serde(default)]
  pub cast: Vec<String>,
  #[serde(default)]
  pub keywords: Vec<String>,
  #[serde(default)]
  pub overview: String
}

/// A catalog entry with its derived feature text. Immutable once built; a
/// fresh upstream fetch produces a fresh catalog, never an in-place update.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
  pub id: u64,
  pub title: String,
  combined_features: String
}

impl CatalogItem {
  fn from_record(record: ItemRecord) -> Self {
    let combined_features = combine_features(&record);
    Self {
      id: record.id,
      title: record.title,
      combined_features
    }
  }

  /// The space-joined text blob this item is vectorized from.
  pub fn combined_features(&self) -> &str {
    &self.combined_features
  }
}

// Fixed field order so the same record always yields the same blob.
fn combine_features(record: &ItemRecord) -> String {
  record.genres.iter()
    .chain(record.cast.iter())
    .chain(record.keywords.iter())
    .map(String::as_str)
    .chain(std::iter::once(record.overview.as_str()))
    .filter(|text| !text.is_empty())
    .collect::<Vec<&str>>()
    .join(" ")
}

/// An ordered snapshot of recommendable items. Position in the catalog is
/// the index used by the similarity matrix built from it.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
  items: Vec<CatalogItem>
}

impl Catalog {
  pub fn from_records<I>(records: I) -> Self
    where I: IntoIterator<Item = ItemRecord> {
    let span = span!(Level::DEBUG, "catalog-build");
    let _guard = span.enter();
    let items = records.into_iter()
      .map(CatalogItem::from_record)
      .collect::<Vec<CatalogItem>>();
    debug!("Built catalog of {} items", items.len());
    Self { items }
  }

  /// Position of the first item whose title matches `title` exactly.
  pub fn position_of(&self, title: &str) -> Option<usize> {
    self.items.iter()
      .position(|item| item.title == title)
  }

  pub fn get(&self, position: usize) -> Option<&CatalogItem> {
    self.items.get(position)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
    self.items.iter()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(id: u64, title: &str) -> ItemRecord {
    ItemRecord {
      id,
      title: title.to_owned(),
      genres: vec!["Action".to_owned(), "Adventure".to_owned()],
      cast: vec!["A. Actor".to_owned()],
      keywords: vec!["heist".to_owned()],
      overview: "a daring heist".to_owned()
    }
  }

  #[test]
  fn combines_fields_in_fixed_order() {
    let catalog = Catalog::from_records(vec![record(1, "The Job")]);
    let item = catalog.get(0).unwrap();
    assert_eq!(
      item.combined_features(),
      "Action Adventure A. Actor heist a daring heist"
    );
  }

  #[test]
  fn missing_fields_degrade_to_empty_text() {
    let sparse = ItemRecord {
      id: 2,
      title: "Sparse".to_owned(),
      ..ItemRecord::default()
    };
    let catalog = Catalog::from_records(vec![sparse]);
    assert_eq!(catalog.get(0).unwrap().combined_features(), "");
  }

  #[test]
  fn sparse_json_records_deserialize_with_defaults() {
    let record: ItemRecord =
      serde_json::from_str(r#"{"id": 7, "title": "Bare"}"#).unwrap();
    assert_eq!(record.title, "Bare");
    assert!(record.genres.is_empty());
    assert!(record.overview.is_empty());
  }

  #[test]
  fn position_of_returns_first_match() {
    let catalog = Catalog::from_records(vec![
      record(1, "Twin"),
      record(2, "Other"),
      record(3, "Twin"),
    ]);
    assert_eq!(catalog.position_of("Twin"), Some(0));
    assert_eq!(catalog.position_of("Other"), Some(1));
    assert_eq!(catalog.position_of("Missing"), None);
  }

  #[test]
  fn preserves_record_order() {
    let catalog = Catalog::from_records(vec![record(1, "A"), record(2, "B")]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(0).unwrap().id, 1);
    assert_eq!(catalog.get(1).unwrap().id, 2);
  }
}

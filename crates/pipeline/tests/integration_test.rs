//! Integration tests for the pipeline.
//!
//! These tests verify that feature combination and vectorization work
//! together on a loaded catalog.

use data_loader::{FeatureField, MovieCatalog, MovieRecord};
use pipeline::{CountVectorizer, FeatureCombiner, WordTokenizer};

fn create_test_catalog() -> MovieCatalog {
    MovieCatalog::from_records(vec![
        MovieRecord::new(0, "Alpha", Some("k1"), Some("c1"), Some("g1"), Some("d1")),
        MovieRecord::new(1, "Beta", Some("k1"), Some("c2"), Some("g1"), Some("d2")),
        MovieRecord::new(2, "Gamma", None, None, None, None),
    ])
    .unwrap()
}

#[test]
fn test_catalog_to_count_matrix() {
    let catalog = create_test_catalog();

    let combined = FeatureCombiner::new().combine_all(catalog.movies());
    let matrix = CountVectorizer::new().fit_transform(&combined);

    assert_eq!(matrix.n_rows(), catalog.len());
    assert_eq!(
        matrix.vocabulary().terms(),
        &["k1", "c1", "g1", "d1", "c2", "d2"]
    );

    // Alpha and Beta share k1 and g1
    let alpha = matrix.row(0).unwrap();
    let beta = matrix.row(1).unwrap();
    assert_eq!(alpha.dot(beta), 2.0);

    // Gamma has no tokens at all
    assert!(matrix.row(2).unwrap().is_empty());
}

#[test]
fn test_field_selection_changes_vocabulary() {
    let catalog = create_test_catalog();

    let combiner = FeatureCombiner::new().with_fields([FeatureField::Genres]);
    let combined = combiner.combine_all(catalog.movies());
    let matrix = CountVectorizer::new().fit_transform(&combined);

    assert_eq!(matrix.vocabulary().terms(), &["g1"]);
    assert_eq!(matrix.row(0), matrix.row(1));
}

#[test]
fn test_min_token_len_controls_vocabulary() {
    let catalog = MovieCatalog::from_records(vec![MovieRecord::new(
        0,
        "Short",
        Some("a bb"),
        None,
        None,
        Some("X"),
    )])
    .unwrap();
    let combined = FeatureCombiner::new().combine_all(catalog.movies());

    let strict = CountVectorizer::new().fit_transform(&combined);
    assert_eq!(strict.n_cols(), 1);

    let loose = CountVectorizer::with_tokenizer(WordTokenizer::new().with_min_len(1))
        .fit_transform(&combined);
    assert_eq!(loose.vocabulary().terms(), &["a", "bb", "X"]);
}

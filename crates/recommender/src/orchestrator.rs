//! # Recommendation Orchestrator
//!
//! This module wires the whole content-based pipeline together.
//!
//! Built once at startup:
//! 1. Combine each movie's feature fields into one text blob
//! 2. Vectorize the blobs into count vectors
//! 3. Build the similarity engine (eager matrix or lazy rows)
//!
//! Per query:
//! 1. Resolve the typed title to a movie index
//! 2. Fetch its similarity row (cached when repeated)
//! 3. Rank, exclude the movie itself, keep the top K
//! 4. Remember the report so it can be saved later

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use data_loader::{MovieCatalog, MovieIndex};
use pipeline::{CountVectorizer, FeatureCombiner, WordTokenizer};
use similarity::SimilarityEngine;

use crate::config::RecommenderConfig;
use crate::error::{RecommendError, Result};
use crate::ranking::rank;
use crate::report::RecommendationReport;
use crate::resolver::{QueryResolver, Resolution};

/// Result of one recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Recommendations(RecommendationReport),
    /// No exact title match; `suggestions` may be empty
    NotFound {
        query: String,
        suggestions: Vec<String>,
    },
}

/// Owns the catalog, the similarity engine and the last rendered report
pub struct RecommendationOrchestrator {
    catalog: Arc<MovieCatalog>,
    resolver: QueryResolver,
    engine: SimilarityEngine,
    config: RecommenderConfig,
    last_report: Option<RecommendationReport>,
}

impl RecommendationOrchestrator {
    /// Load the dataset at `path` and build the orchestrator
    pub fn load(path: &Path, config: RecommenderConfig) -> Result<Self> {
        let catalog = MovieCatalog::load_from_file(path)?;
        Ok(Self::build(Arc::new(catalog), config))
    }

    /// Run feature combination, vectorization and similarity setup
    #[instrument(skip_all, fields(movies = catalog.len(), strategy = %config.strategy))]
    pub fn build(catalog: Arc<MovieCatalog>, config: RecommenderConfig) -> Self {
        let start_time = Instant::now();

        let combiner = FeatureCombiner::new().with_fields(config.fields.iter().copied());
        let combined = combiner.combine_all(catalog.movies());
        debug!("Combined features for {} movies", combined.len());

        let tokenizer = WordTokenizer::new().with_min_len(config.min_token_len);
        let counts = CountVectorizer::with_tokenizer(tokenizer).fit_transform(&combined);
        info!(
            "Count matrix: {} movies x {} tokens",
            counts.n_rows(),
            counts.n_cols()
        );

        let engine = SimilarityEngine::with_strategy(config.strategy, counts);
        info!(
            "Recommender ready ({} scorer) in {:.2?}",
            engine.scorer_name(),
            start_time.elapsed()
        );

        Self {
            resolver: QueryResolver::new(catalog.clone()),
            catalog,
            engine,
            config,
            last_report: None,
        }
    }

    /// Main entry point: recommend movies similar to a typed title.
    ///
    /// A miss is a normal outcome carrying "did you mean" suggestions.
    pub fn recommend(&mut self, title_text: &str) -> Result<QueryOutcome> {
        let query = title_text.trim();

        match self.resolver.resolve_index(query) {
            Resolution::Found(index) => {
                let report = self.build_report(index, Some(query))?;
                Ok(QueryOutcome::Recommendations(report))
            }
            Resolution::NotFound => {
                let suggestions: Vec<String> = if query.is_empty() {
                    Vec::new()
                } else {
                    self.resolver
                        .suggest_titles(query, self.config.suggestion_limit)
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                };
                info!(
                    "No exact match for '{}', {} suggestions",
                    query,
                    suggestions.len()
                );
                Ok(QueryOutcome::NotFound {
                    query: query.to_string(),
                    suggestions,
                })
            }
        }
    }

    /// Recommend movies similar to a known index
    pub fn recommend_index(&mut self, index: MovieIndex) -> Result<RecommendationReport> {
        self.build_report(index, None)
    }

    /// Rank the row for `index` and remember the report.
    ///
    /// The header names `query` when given, else the catalog title.
    fn build_report(
        &mut self,
        index: MovieIndex,
        query: Option<&str>,
    ) -> Result<RecommendationReport> {
        let start_time = Instant::now();

        let row = self.engine.similarity_row(index)?;
        let recommendations = rank(&row, index, self.config.top_k, &self.catalog);
        let title = self.catalog.title_of(index).unwrap_or_default();

        info!(
            "Selected {} recommendations for '{}' in {:.2?}",
            recommendations.len(),
            title,
            start_time.elapsed()
        );

        let mut report = RecommendationReport::new(title, index, recommendations);
        if let Some(query) = query {
            report = report.with_query(query);
        }
        self.last_report = Some(report.clone());
        Ok(report)
    }

    /// Prefix completions for live typing
    pub fn complete_title(&self, prefix: &str) -> Vec<&str> {
        self.resolver
            .complete_title(prefix, self.config.live_suggestion_limit)
    }

    /// Contains-search over titles
    pub fn search_titles(&self, text: &str, limit: usize) -> Vec<&str> {
        self.resolver.suggest_titles(text.trim(), limit)
    }

    /// Forget the last rendered report
    pub fn clear(&mut self) {
        self.last_report = None;
    }

    /// Forget the last report and drop the cached similarity row
    pub fn reset(&mut self) {
        self.clear();
        self.engine.reset();
    }

    /// Save the last rendered report as plain text
    pub fn save_last_report(&self, path: &Path) -> Result<()> {
        self.last_report
            .as_ref()
            .ok_or(RecommendError::NothingToSave)?
            .save(path)
    }

    pub fn last_report(&self) -> Option<&RecommendationReport> {
        self.last_report.as_ref()
    }

    pub fn catalog(&self) -> &Arc<MovieCatalog> {
        &self.catalog
    }

    pub fn resolver(&self) -> &QueryResolver {
        &self.resolver
    }

    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }
}

//! End-to-end tests: CSV on disk -> recommendations -> saved report.

use recommender::{
    QueryOutcome, RecommendationOrchestrator, RecommenderConfig, Resolution,
    SimilarityStrategy,
};
use std::io::Write;
use tempfile::NamedTempFile;

const DATASET: &str = "\
index,title,keywords,cast,genres,director
0,Alpha,k1,c1,g1,d1
1,Beta,k1,c2,g1,d2
2,Gamma,,,,
";

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn create_orchestrator(strategy: SimilarityStrategy) -> RecommendationOrchestrator {
    let file = write_dataset(DATASET);
    let config = RecommenderConfig::default().with_strategy(strategy);
    RecommendationOrchestrator::load(file.path(), config).unwrap()
}

const STRATEGIES: [SimilarityStrategy; 2] = [SimilarityStrategy::Eager, SimilarityStrategy::Lazy];

#[test]
fn test_resolve_and_rank_small_dataset() {
    for strategy in STRATEGIES {
        let mut orchestrator = create_orchestrator(strategy);

        let index = orchestrator.resolver().resolve_index("alpha");
        assert_eq!(index, Resolution::Found(0));

        let report = orchestrator.recommend_index(0).unwrap();
        let titles: Vec<_> = report.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta", "Gamma"]);

        // Shares keyword and genre: 2 / (2 * 2)
        assert!((report.recommendations[0].score - 0.5).abs() < 1e-6);
        assert_eq!(report.recommendations[1].score, 0.0);
        for rec in &report.recommendations {
            assert!((0.0..=1.0).contains(&rec.score));
        }
    }
}

#[test]
fn test_rank_respects_top_k() {
    let file = write_dataset(DATASET);
    let config = RecommenderConfig::default().with_top_k(1);
    let mut orchestrator = RecommendationOrchestrator::load(file.path(), config).unwrap();

    let report = orchestrator.recommend_index(0).unwrap();
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].title, "Beta");
}

#[test]
fn test_self_similarity_and_symmetry() {
    for strategy in STRATEGIES {
        let orchestrator = create_orchestrator(strategy);
        let engine = orchestrator.engine();

        for i in 0..engine.len() {
            assert_eq!(engine.score(i, i).unwrap(), 1.0);
            for j in 0..engine.len() {
                assert_eq!(engine.score(i, j).unwrap(), engine.score(j, i).unwrap());
            }
        }
    }
}

#[test]
fn test_recommendations_exclude_query() {
    let mut orchestrator = create_orchestrator(SimilarityStrategy::Eager);
    for title in ["Alpha", "Beta", "Gamma"] {
        let QueryOutcome::Recommendations(report) = orchestrator.recommend(title).unwrap() else {
            panic!("{} should resolve", title);
        };
        assert!(report.recommendations.iter().all(|r| r.title != title));
        assert_eq!(report.recommendations.len(), 2);
    }
}

#[test]
fn test_repeated_title_reuses_cached_row() {
    let mut orchestrator = create_orchestrator(SimilarityStrategy::Lazy);

    orchestrator.recommend("Alpha").unwrap();
    orchestrator.recommend("ALPHA ").unwrap();
    assert_eq!(orchestrator.engine().computed_rows(), 1);

    orchestrator.recommend("Beta").unwrap();
    orchestrator.recommend("Alpha").unwrap();
    assert_eq!(orchestrator.engine().computed_rows(), 3);
}

#[test]
fn test_repeated_query_is_idempotent() {
    let mut orchestrator = create_orchestrator(SimilarityStrategy::Eager);
    let first = orchestrator.recommend("beta").unwrap();
    let second = orchestrator.recommend("beta").unwrap();
    assert_eq!(first, second);

    let score = orchestrator.engine().score(1, 0).unwrap();
    assert!((score - 0.5).abs() < 1e-6);
}

#[test]
fn test_suggestions() {
    let mut orchestrator = create_orchestrator(SimilarityStrategy::Eager);

    assert_eq!(orchestrator.resolver().suggest_titles("al", 10), vec!["Alpha"]);
    assert_eq!(orchestrator.complete_title("g"), vec!["Gamma"]);

    let outcome = orchestrator.recommend("Zzz").unwrap();
    assert_eq!(
        outcome,
        QueryOutcome::NotFound {
            query: "Zzz".to_string(),
            suggestions: Vec::new(),
        }
    );

    let outcome = orchestrator.recommend("et").unwrap();
    assert_eq!(
        outcome,
        QueryOutcome::NotFound {
            query: "et".to_string(),
            suggestions: vec!["Beta".to_string()],
        }
    );
}

#[test]
fn test_save_report_round_trip() {
    let mut orchestrator = create_orchestrator(SimilarityStrategy::Eager);
    orchestrator.recommend("Alpha").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.txt");
    orchestrator.save_last_report(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        saved,
        "Movies similar to 'Alpha':\n\nBeta (Score: 0.50)\nGamma (Score: 0.00)\n"
    );
}

#[test]
fn test_saved_header_names_typed_query() {
    let mut orchestrator = create_orchestrator(SimilarityStrategy::Lazy);
    orchestrator.recommend("  beta ").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beta.txt");
    orchestrator.save_last_report(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("Movies similar to 'beta':\n\nAlpha (Score: 0.50)\n"));
}

#[test]
fn test_load_quoted_fields() {
    let file = write_dataset(
        "index,title,keywords,cast,genres,director\n\
         0,Avatar,\"culture clash, future\",\"Sam Worthington, Zoe Saldana\",\"Action, Science Fiction\",James Cameron\n\
         1,\"Aliens, Again\",\"future, alien\",Sigourney Weaver,\"Action, Science Fiction\",James Cameron\n",
    );
    let mut orchestrator =
        RecommendationOrchestrator::load(file.path(), RecommenderConfig::default()).unwrap();

    assert_eq!(orchestrator.catalog().len(), 2);
    assert_eq!(orchestrator.catalog().title_of(1), Some("Aliens, Again"));

    let QueryOutcome::Recommendations(report) = orchestrator.recommend("avatar").unwrap() else {
        panic!("avatar should resolve");
    };
    assert_eq!(report.recommendations[0].title, "Aliens, Again");
    assert!(report.recommendations[0].score > 0.0);
}

#[test]
fn test_ranking_cached_row_is_stable() {
    let mut orchestrator = create_orchestrator(SimilarityStrategy::Eager);
    let first = orchestrator.recommend_index(0).unwrap();
    let second = orchestrator.recommend_index(0).unwrap();

    assert_eq!(first, second);
    assert_eq!(orchestrator.engine().computed_rows(), 1);
    assert_eq!(orchestrator.engine().cache_hits(), 1);
}

#[test]
fn test_load_missing_columns_fails() {
    let file = write_dataset("index,title,keywords\n0,A,k\n");
    let result = RecommendationOrchestrator::load(file.path(), RecommenderConfig::default());
    assert!(matches!(result, Err(recommender::RecommendError::Load(_))));
}

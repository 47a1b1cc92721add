//! End-to-end pipeline tests: search, summary, extraction and classification

mod common;

use common::{create_mock_client, fixture};
use papers_client::{collect_papers, PipelineOutcome};
use papers_parser::AffiliationClassifier;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_search(mock_server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_pipeline_classifies_authors() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, fixture("esearch_vaccine.xml")).await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("id", "38000001,38000002,38000003"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("esummary_vaccine.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = collect_papers(&client, &AffiliationClassifier::new(), "mRNA vaccine").await;

    let papers = match outcome {
        PipelineOutcome::Papers(papers) => papers,
        other => panic!("expected papers, got {:?}", other),
    };
    let ids: Vec<&str> = papers.iter().map(|p| p.pmid.as_str()).collect();
    assert_eq!(ids, vec!["38000001", "38000002", "38000003"]);

    // Duplicate "Smith J" collapses; the Stanford author is never flagged
    let first = &papers[0];
    assert_eq!(first.non_academic_authors, vec!["Smith J", "Garcia M"]);
    let companies: Vec<&str> = first
        .company_affiliations
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(companies, vec!["BioNTech SE, Mainz", "Pfizer Inc, New York"]);
    assert!(first.corresponding_author_email.is_none());

    // No author list at all
    assert!(papers[1].non_academic_authors.is_empty());
    assert!(papers[1].company_affiliations.is_empty());

    // Flat author names without affiliations
    assert!(papers[2].non_academic_authors.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_pipeline_no_ids_skips_summary() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, fixture("esearch_empty.xml")).await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = collect_papers(&client, &AffiliationClassifier::new(), "nothing").await;

    assert!(matches!(outcome, PipelineOutcome::NoMatches));
    assert!(outcome.has_no_ids());
    assert!(outcome.error().is_none());
    assert!(outcome.papers().is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_pipeline_search_failure_skips_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = collect_papers(&client, &AffiliationClassifier::new(), "vaccine").await;

    assert!(matches!(outcome, PipelineOutcome::SearchFailed(_)));
    assert!(outcome.has_no_ids());
    assert!(outcome.error().is_some_and(|e| e.is_transport()));
    assert!(outcome.into_papers().is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_pipeline_summary_parse_failure_yields_no_papers() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, fixture("esearch_vaccine.xml")).await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>Bad Gateway"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = collect_papers(&client, &AffiliationClassifier::new(), "vaccine").await;

    assert!(matches!(outcome, PipelineOutcome::SummaryFailed(_)));
    assert!(!outcome.has_no_ids());
    assert!(outcome.error().is_some_and(|e| e.is_parse()));
    assert!(outcome.papers().is_empty());
}

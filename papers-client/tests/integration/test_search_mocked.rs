//! ESearch tests using mocked HTTP responses

mod common;

use common::{create_mock_client, fixture, mock_config};
use papers_client::{ClientConfig, PubMedClient, PubMedError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_search_returns_ids_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "mRNA vaccine"))
        .and(query_param("retmax", "10"))
        .and(query_param("retmode", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("esearch_vaccine.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = client
        .search_ids("mRNA vaccine")
        .await
        .expect("search should succeed");

    assert_eq!(pmids, vec!["38000001", "38000002", "38000003"]);
    assert!(logs_contain("Query matched more articles than requested"));
}

#[tokio::test]
#[traced_test]
async fn test_search_no_matches_is_empty_not_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("esearch_empty.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = client
        .search_ids("zzqxnonexistentterm")
        .await
        .expect("empty search should succeed");

    assert!(pmids.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_forwards_config_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retmax", "3"))
        .and(query_param("email", "someone@example.org"))
        .and(query_param("tool", "get-papers-list"))
        .and(query_param("api_key", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("esearch_vaccine.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = mock_config(&mock_server)
        .with_max_results(3)
        .with_email("someone@example.org")
        .with_tool("get-papers-list")
        .with_api_key("abc123");
    let client = PubMedClient::with_config(config).expect("client should build");

    let pmids = client.search_ids("vaccine").await.expect("search should succeed");
    assert_eq!(pmids.len(), 3);
}

#[tokio::test]
#[traced_test]
async fn test_search_blank_query_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = client.search_ids("   ").await.expect("blank query is not an error");

    assert!(pmids.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .search_ids("vaccine")
        .await
        .expect_err("503 should be reported");

    assert!(err.is_transport());
    assert!(matches!(err, PubMedError::ApiError { status: 503, .. }));
}

#[tokio::test]
#[traced_test]
async fn test_search_in_band_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<eSearchResult><ERROR>Invalid query syntax</ERROR></eSearchResult>",
        ))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    match client.search_ids("((vaccine").await {
        Err(PubMedError::ApiError { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("Invalid query syntax"));
        }
        other => panic!("expected in-band API error, got {:?}", other),
    }
}

#[tokio::test]
#[traced_test]
async fn test_search_in_band_error_is_not_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<eSearchResult><ERROR>Invalid query syntax</ERROR></eSearchResult>",
        ))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .search_ids("((vaccine")
        .await
        .expect_err("in-band error without ids should fail");

    assert!(!err.is_transport());
    assert!(!err.is_parse());
}

#[tokio::test]
#[traced_test]
async fn test_search_in_band_error_with_ids_keeps_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<eSearchResult><Count>2</Count><IdList><Id>111</Id><Id>222</Id></IdList>\
             <ERROR>Phrase not found</ERROR></eSearchResult>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = client
        .search_ids("vaccine \"zzqx\"")
        .await
        .expect("ids alongside an error are still returned");

    assert_eq!(pmids, vec!["111", "222"]);
    assert!(logs_contain("ESearch reported an error alongside results"));
}

#[tokio::test]
#[traced_test]
async fn test_search_malformed_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<eSearchResult><IdList><Id>1</Id>"),
        )
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .search_ids("vaccine")
        .await
        .expect_err("truncated XML should fail");

    assert!(err.is_parse());
}

#[tokio::test]
#[traced_test]
async fn test_search_connection_refused() {
    // Bind and drop a listener to get a port with nothing behind it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("should bind")
        .port();

    let config = ClientConfig::new().with_base_url(format!("http://127.0.0.1:{port}"));
    let client = PubMedClient::with_config(config).expect("client should build");

    let err = client
        .search_ids("vaccine")
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, PubMedError::RequestError(_)));
}

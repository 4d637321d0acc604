//! Integration tests for the scraper
//!
//! These tests use wiremock to serve guideline pages and drive the full
//! fetch, extract, assemble and write cycle end-to-end.

use sms_guidelines::collector::{run_scrape, Coordinator};
use sms_guidelines::config::{Config, ExtractConfig, HttpConfig, OutputConfig, SourceConfig};
use sms_guidelines::GuidelineError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SENDER_ID_PAGE: &str = r#"<html><head><title>xx</title></head><body>
    <section id="guideline-tables">
      <table>
        <tr><th>Locale Summary</th></tr>
        <tr><td><b>Sender ID</b></td><td>Required</td></tr>
      </table>
    </section>
</body></html>"#;

const NO_GUIDELINES_PAGE: &str =
    r#"<html><body><p>No guidelines are published for this country.</p></body></html>"#;

const MULTI_CATEGORY_PAGE: &str = r#"<html><body>
    <section id="guideline-tables">
      <table>
        <tr><th>Locale Summary</th></tr>
        <tr><td>Region</td><td>Europe</td></tr>
      </table>
    </section>
    <section id="guideline-tables">
      <table>
        <tr><th></th><th>Domestic <i>Pre-registration</i></th><th><b>Dynamic</b></th></tr>
        <tr><td><b>Sender ID supported</b></td><td>Yes</td><td>No</td></tr>
        <tr><td>Footnote spanning the table</td></tr>
        <tr><td>Use case restrictions</td><td>None</td><td>Marketing blocked</td></tr>
      </table>
    </section>
</body></html>"#;

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, countries: &[&str], csv_path: &str) -> Config {
    Config {
        countries: countries.iter().map(|c| c.to_string()).collect(),
        source: SourceConfig {
            url_template: format!("{}/guidelines/{{}}/sms", base_url),
            landing_url: Some(format!("{}/guidelines/sms", base_url)),
            discover_countries: false,
        },
        http: HttpConfig {
            user_agent: "TestAgent/1.0".to_string(),
            timeout_secs: Some(10),
        },
        extract: ExtractConfig::default(),
        output: OutputConfig {
            csv_path: csv_path.to_string(),
        },
    }
}

async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_two_countries_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/guidelines/xx/sms", 200, SENDER_ID_PAGE).await;
    mount_page(&mock_server, "/guidelines/yy/sms", 200, NO_GUIDELINES_PAGE).await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("guidelines.csv");
    let config = create_test_config(
        &mock_server.uri(),
        &["xx", "yy"],
        csv_path.to_str().unwrap(),
    );

    let stats = run_scrape(config).await.expect("scrape should succeed");
    assert_eq!(stats.countries, 2);
    assert_eq!(stats.pages_fetched, 2);
    assert!(stats.fetch_failures.is_empty());
    assert_eq!(stats.pages_without_guidelines, vec!["yy".to_string()]);
    assert_eq!(stats.columns, 2);

    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        content,
        "\"Sender ID\",\"country_code\"\n\"Required\",\"xx\"\n\"\",\"yy\"\n"
    );

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, strings(&["Sender ID", "country_code"]));
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(
        rows,
        vec![strings(&["Required", "xx"]), strings(&["", "yy"])]
    );
}

#[tokio::test]
async fn test_fetch_failure_does_not_abort_run() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/guidelines/aa/sms", 200, SENDER_ID_PAGE).await;
    mount_page(&mock_server, "/guidelines/bb/sms", 500, "Internal Server Error").await;
    mount_page(&mock_server, "/guidelines/cc/sms", 200, SENDER_ID_PAGE).await;

    let config = create_test_config(&mock_server.uri(), &[], "unused.csv");
    let coordinator = Coordinator::new(config).unwrap();

    let outcome = coordinator.run(&strings(&["aa", "bb", "cc"])).await;

    let records = outcome.table.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("Sender ID"), Some("Required"));
    assert_eq!(records[1].len(), 1);
    assert_eq!(records[1].country_code(), "bb");
    assert_eq!(records[2].get("Sender ID"), Some("Required"));

    assert_eq!(outcome.stats.pages_fetched, 2);
    assert_eq!(outcome.stats.fetch_failures.len(), 1);
    assert_eq!(outcome.stats.fetch_failures[0].country_code, "bb");
    assert_eq!(outcome.stats.fetch_failures[0].reason, "HTTP status 500");
}

#[tokio::test]
async fn test_unmocked_page_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;

    let config = create_test_config(&mock_server.uri(), &[], "unused.csv");
    let coordinator = Coordinator::new(config).unwrap();

    let (record, failure) = coordinator.scrape_country("qq").await;
    assert_eq!(record.len(), 1);
    assert_eq!(record.country_code(), "qq");
    assert_eq!(failure.as_deref(), Some("HTTP status 404"));
}

#[tokio::test]
async fn test_redirected_page_is_extracted() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/guidelines/xx/sms"))
        .respond_with(ResponseTemplate::new(301).insert_header(
            "location",
            format!("{}/en/guidelines/xx/sms", mock_server.uri()).as_str(),
        ))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/en/guidelines/xx/sms", 200, SENDER_ID_PAGE).await;

    let config = create_test_config(&mock_server.uri(), &[], "unused.csv");
    let coordinator = Coordinator::new(config).unwrap();

    let (record, failure) = coordinator.scrape_country("xx").await;
    assert_eq!(failure, None);
    assert_eq!(record.get("Sender ID"), Some("Required"));
}

#[tokio::test]
async fn test_multi_category_page_with_normalized_keys() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/guidelines/fr/sms", 200, MULTI_CATEGORY_PAGE).await;

    let mut config = create_test_config(&mock_server.uri(), &["fr"], "unused.csv");
    config.extract.normalize_keys = true;
    let coordinator = Coordinator::new(config).unwrap();

    let outcome = coordinator.run(&strings(&["fr"])).await;

    assert_eq!(
        outcome.table.columns(),
        [
            "Domestic Pre-registration - Sender ID supported",
            "Domestic Pre-registration - Use case restrictions",
            "Dynamic - Sender ID supported",
            "Dynamic - Use case restrictions",
            "Region",
            "country_code",
        ]
    );
    let rows: Vec<Vec<&str>> = outcome.table.rows().collect();
    assert_eq!(
        rows,
        vec![vec!["Yes", "None", "No", "Marketing blocked", "Europe", "fr"]]
    );
}

#[tokio::test]
async fn test_country_discovery() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/guidelines/sms",
        200,
        r#"<html><body>
            <a class="card-icon__overlay" href="/en-us/guidelines/de/sms">Germany</a>
            <a class="card-icon__overlay" href="/en-us/guidelines/at/sms">Austria</a>
            <a class="card-icon__overlay" href="/en-us/guidelines/de/sms">Germany</a>
            <a class="card-icon__overlay" href="/en-us/guidelines/BAD/sms">Bad</a>
        </body></html>"#,
    )
    .await;

    let mut config = create_test_config(&mock_server.uri(), &["xx"], "unused.csv");
    config.source.discover_countries = true;
    let coordinator = Coordinator::new(config).unwrap();

    let countries = coordinator.resolve_countries().await.unwrap();
    assert_eq!(countries, strings(&["de", "at"]));
}

#[tokio::test]
async fn test_discovery_failure_falls_back_to_configured() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/guidelines/sms", 503, "Unavailable").await;

    let mut config = create_test_config(&mock_server.uri(), &["xx", "yy"], "unused.csv");
    config.source.discover_countries = true;
    let coordinator = Coordinator::new(config).unwrap();

    let countries = coordinator.resolve_countries().await.unwrap();
    assert_eq!(countries, strings(&["xx", "yy"]));
}

#[tokio::test]
async fn test_no_countries_is_an_error() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/guidelines/sms", 200, NO_GUIDELINES_PAGE).await;

    let mut config = create_test_config(&mock_server.uri(), &[], "unused.csv");
    config.source.discover_countries = true;
    let coordinator = Coordinator::new(config).unwrap();

    let result = coordinator.resolve_countries().await;
    assert!(matches!(result, Err(GuidelineError::NoCountries)));
}

#[tokio::test]
async fn test_unwritable_output_fails_after_scraping() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/guidelines/xx/sms", 200, SENDER_ID_PAGE).await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("no-such-dir").join("guidelines.csv");
    let config = create_test_config(&mock_server.uri(), &["xx"], csv_path.to_str().unwrap());

    let result = run_scrape(config).await;
    assert!(matches!(result, Err(GuidelineError::Io(_))));
    assert!(!csv_path.exists());
}

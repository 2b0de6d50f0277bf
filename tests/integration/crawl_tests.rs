//! Integration tests for the crawl pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run the real
//! HTTP fetcher through the full crawl → filter → build cycle.

use flow_mapper::config::Config;
use flow_mapper::graph::{FlowEdge, FlowGraph};
use flow_mapper::output::to_pretty_json;
use flow_mapper::FlowMapper;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given depth and threshold
fn create_test_config(max_depth: u32, threshold: f64) -> Config {
    let mut config = Config::default();
    config.crawler.max_depth = max_depth;
    config.crawler.fetch_timeout_secs = 2;
    config.filter.threshold = threshold;
    config
}

/// Builds an HTML page with a title and one anchor per href
fn html_page(title: &str, hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, anchors
    )
}

/// Mounts a GET handler serving an HTML page
async fn mount_page(
    server: &MockServer,
    route: &str,
    title: &str,
    hrefs: &[&str],
    expected_hits: Option<u64>,
) {
    let mock = Mock::given(method("GET")).and(path(route)).respond_with(
        ResponseTemplate::new(200)
            .set_body_string(html_page(title, hrefs))
            .insert_header("content-type", "text/html"),
    );

    match expected_hits {
        Some(hits) => mock.expect(hits).mount(server).await,
        None => mock.mount(server).await,
    }
}

fn edge(base: &str, from: &str, to: &str) -> FlowEdge {
    FlowEdge {
        from: format!("{}{}", base, from),
        to: format!("{}{}", base, to),
    }
}

fn node_ids(flow: &FlowGraph) -> Vec<String> {
    flow.nodes.iter().map(|n| n.id.clone()).collect()
}

#[tokio::test]
async fn test_home_blog_contact_flow() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(&mock_server, "/", "Home", &["/blog", "/contact"], Some(1)).await;
    mount_page(&mock_server, "/blog", "Blog", &["/", "/deep"], Some(1)).await;
    mount_page(&mock_server, "/contact", "Contact", &["/"], Some(1)).await;
    // Beyond max depth 1: never fetched
    mount_page(&mock_server, "/deep", "Deep", &[], Some(0)).await;

    let config = create_test_config(1, 0.7);
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper.run(&format!("{}/", base)).await.expect("Crawl failed");

    assert_eq!(
        node_ids(&report.flow),
        vec![
            format!("{}/", base),
            format!("{}/blog", base),
            format!("{}/contact", base)
        ]
    );
    let titles: Vec<&str> = report.flow.nodes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Home", "Blog", "Contact"]);

    assert_eq!(
        report.flow.edges,
        vec![
            edge(&base, "/", "/blog"),
            edge(&base, "/", "/contact"),
            edge(&base, "/blog", "/"),
            edge(&base, "/blog", "/deep"),
            edge(&base, "/contact", "/"),
        ]
    );
    assert_eq!(report.pages_visited, 3);
}

#[tokio::test]
async fn test_global_navigation_removed() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // Every page carries the same header links; only the flow links differ
    let nav = ["/", "/pricing", "/login"];
    let with_nav = |extra: &'static str| -> Vec<&'static str> {
        let mut hrefs = nav.to_vec();
        hrefs.push(extra);
        hrefs
    };
    mount_page(&mock_server, "/", "Home", &with_nav("/features"), None).await;
    mount_page(&mock_server, "/pricing", "Pricing", &with_nav("/signup"), None).await;
    mount_page(&mock_server, "/login", "Login", &nav, None).await;
    mount_page(&mock_server, "/features", "Features", &with_nav("/signup"), None).await;
    mount_page(&mock_server, "/signup", "Sign up", &nav, None).await;

    let config = create_test_config(2, 0.7);
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper.run(&format!("{}/", base)).await.expect("Crawl failed");

    assert_eq!(report.flow.nodes.len(), 5);
    assert_eq!(
        report.global_links,
        vec![
            format!("{}/", base),
            format!("{}/pricing", base),
            format!("{}/login", base)
        ]
    );

    let mut edges = report.flow.edges.clone();
    edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
    let mut expected = vec![
        edge(&base, "/", "/features"),
        edge(&base, "/pricing", "/signup"),
        edge(&base, "/features", "/signup"),
    ];
    expected.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
    assert_eq!(edges, expected);

    // The JSON document parses back into the same graph
    let json = to_pretty_json(&report.flow).expect("Failed to render JSON");
    let parsed: FlowGraph = serde_json::from_str(&json).expect("Invalid JSON");
    assert_eq!(parsed, report.flow);
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;

    // Create a chain: / -> level1 -> level2 -> level3
    mount_page(&mock_server, "/", "Root", &["/level1"], Some(1)).await;
    mount_page(&mock_server, "/level1", "Level 1", &["/level2"], Some(1)).await;
    mount_page(&mock_server, "/level2", "Level 2", &["/level3"], Some(1)).await;
    // Level3 should not be crawled (depth > 2)
    mount_page(&mock_server, "/level3", "Level 3", &[], Some(0)).await;

    let config = create_test_config(2, 1.0);
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper
        .run(&format!("{}/", mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.flow.nodes.len(), 3);
    // level3 is still an edge target
    assert_eq!(report.flow.dangling_edges().count(), 1);
}

#[tokio::test]
async fn test_failed_pages_are_skipped_not_retried() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(&mock_server, "/", "Home", &["/broken", "/ok"], Some(1)).await;
    mount_page(&mock_server, "/ok", "OK", &["/broken"], Some(1)).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(2, 1.0);
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper.run(&format!("{}/", base)).await.expect("Crawl failed");

    assert_eq!(
        node_ids(&report.flow),
        vec![format!("{}/", base), format!("{}/ok", base)]
    );
    assert!(report.flow.edges.contains(&edge(&base, "/ok", "/broken")));
    assert_eq!(report.statistics.pages_failed(), 1);
    assert_eq!(report.pages_visited, 3);
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(&mock_server, "/", "Home", &["/slow", "/fast"], None).await;
    mount_page(&mock_server, "/fast", "Fast", &[], None).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Slow", &[]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(1, 1.0);
    config.crawler.fetch_timeout_secs = 1;
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper.run(&format!("{}/", base)).await.expect("Crawl failed");

    assert_eq!(
        node_ids(&report.flow),
        vec![format!("{}/", base), format!("{}/fast", base)]
    );
    assert_eq!(report.statistics.pages_failed(), 1);
}

#[tokio::test]
async fn test_external_site_never_fetched() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base = mock_server.uri();

    let external = format!("{}/elsewhere", other_server.uri());
    mount_page(&mock_server, "/", "Home", &[&external, "/about#team"], Some(1)).await;
    mount_page(&mock_server, "/about", "About", &[], Some(1)).await;
    mount_page(&other_server, "/elsewhere", "Elsewhere", &[], Some(0)).await;

    let config = create_test_config(2, 1.0);
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper.run(&format!("{}/", base)).await.expect("Crawl failed");

    assert_eq!(report.flow.edges, vec![edge(&base, "/", "/about")]);
    assert_eq!(report.statistics.external_links_skipped, 1);
}

#[tokio::test]
async fn test_missing_title_uses_url() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>No title here</p></body></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(2, 0.7);
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper.run(&format!("{}/", base)).await.expect("Crawl failed");

    assert_eq!(report.flow.nodes.len(), 1);
    assert_eq!(report.flow.nodes[0].title, format!("{}/", base));
    assert!(report.flow.edges.is_empty());
}

#[tokio::test]
async fn test_concurrent_crawl_matches_page_set() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_page(&mock_server, "/", "Home", &["/a", "/b", "/c"], Some(1)).await;
    mount_page(&mock_server, "/a", "A", &["/shared"], Some(1)).await;
    mount_page(&mock_server, "/b", "B", &["/shared"], Some(1)).await;
    mount_page(&mock_server, "/c", "C", &["/shared"], Some(1)).await;
    mount_page(&mock_server, "/shared", "Shared", &[], Some(1)).await;

    let mut config = create_test_config(2, 1.0);
    config.crawler.concurrency = 4;
    let mapper = FlowMapper::from_config(&config).expect("Failed to build mapper");
    let report = mapper.run(&format!("{}/", base)).await.expect("Crawl failed");

    assert_eq!(
        node_ids(&report.flow),
        vec![
            format!("{}/", base),
            format!("{}/a", base),
            format!("{}/b", base),
            format!("{}/c", base),
            format!("{}/shared", base)
        ]
    );
    assert_eq!(report.flow.edges.len(), 6);
}

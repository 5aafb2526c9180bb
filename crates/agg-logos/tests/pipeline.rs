//! End-to-end logo pipeline behavior against an in-memory fetcher.

use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use agg_core::Record;
use agg_logos::{
    LogoError, LogoFetcher, LogoManager, LogoOutcome, PlaceholderReason, ProviderList,
    cleanup_unused,
};
use pretty_assertions::assert_eq;

/// Answers by URL prefix; anything unknown is a 404.
#[derive(Default)]
struct FakeFetcher {
    responses: HashMap<&'static str, Result<Vec<u8>, u16>>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    fn body(mut self, prefix: &'static str, body: &[u8]) -> Self {
        self.responses.insert(prefix, Ok(body.to_vec()));
        self
    }

    fn status(mut self, prefix: &'static str, status: u16) -> Self {
        self.responses.insert(prefix, Err(status));
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl LogoFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LogoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        let response = self
            .responses
            .iter()
            .find(|(prefix, _)| url.starts_with(*prefix))
            .map_or(Err(404), |(_, response)| response.clone());
        response.map_err(|status| LogoError::Status {
            status,
            url: url.to_string(),
        })
    }
}

fn providers() -> ProviderList {
    ProviderList::new(vec![
        "https://one.test/{domain}".to_string(),
        "https://two.test/{domain}".to_string(),
        "https://three.test/{domain}".to_string(),
    ])
    .unwrap()
}

fn manager(dir: &std::path::Path, fetcher: FakeFetcher) -> LogoManager<FakeFetcher> {
    LogoManager::new(dir, providers(), fetcher).with_keep(vec!["legacy.png".to_string()])
}

fn company(id: &str, name: &str) -> Record {
    Record::new().with("id", id).with("name", name)
}

#[tokio::test]
async fn agent_gets_placeholder_without_network() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let manager = manager(temp.path(), FakeFetcher::default());
    let agent = company("research-helper", "Research Helper").with("category", "ai-agents");

    let outcome = manager.acquire(&agent).await;

    assert_eq!(
        outcome,
        LogoOutcome::Placeholder {
            filename: "placeholder.svg".to_string(),
            reason: PlaceholderReason::Agent,
        }
    );
    assert_eq!(manager.fetcher().calls(), 0);
}

#[tokio::test]
async fn existing_file_short_circuits() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    fs::write(temp.path().join("openai.png"), b"png").unwrap();
    let manager = manager(temp.path(), FakeFetcher::default());

    let outcome = manager.acquire(&company("openai", "OpenAI")).await;

    assert_eq!(
        outcome,
        LogoOutcome::Existing {
            filename: "openai.png".to_string()
        }
    );
    assert_eq!(manager.fetcher().calls(), 0);
}

#[tokio::test]
async fn falls_back_through_providers_in_order() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let fetcher = FakeFetcher::default()
        .status("https://one.test/", 500)
        .body("https://two.test/", b"")
        .body("https://three.test/", b"logo-bytes");
    let manager = manager(temp.path(), fetcher);
    let record = company("crowdstrike", "CrowdStrike").with("url", "https://www.crowdstrike.com/");

    let outcome = manager.acquire(&record).await;

    assert_eq!(
        outcome,
        LogoOutcome::Downloaded {
            filename: "crowdstrike.png".to_string(),
            provider: 2,
            bytes: 10,
        }
    );
    assert_eq!(
        manager.fetcher().urls(),
        vec![
            "https://one.test/crowdstrike.com",
            "https://two.test/crowdstrike.com",
            "https://three.test/crowdstrike.com",
        ]
    );
    assert_eq!(
        fs::read(temp.path().join("crowdstrike.png")).unwrap(),
        b"logo-bytes"
    );
}

#[tokio::test]
async fn all_providers_failing_leaves_no_file() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let fetcher = FakeFetcher::default().body("https://two.test/", b"");
    let manager = manager(temp.path(), fetcher);

    let outcome = manager.acquire(&company("darktrace", "Darktrace")).await;

    assert_eq!(
        outcome,
        LogoOutcome::Placeholder {
            filename: "placeholder.svg".to_string(),
            reason: PlaceholderReason::AllProvidersFailed,
        }
    );
    assert_eq!(manager.fetcher().calls(), 3);
    assert!(!temp.path().join("darktrace.png").exists());
}

#[tokio::test]
async fn path_like_id_stays_inside_logo_dir() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let logo_dir = temp.path().join("public").join("images").join("logos");
    fs::create_dir_all(&logo_dir).unwrap();
    let fetcher = FakeFetcher::default().body("https://one.test/", b"img");
    let manager = manager(&logo_dir, fetcher);
    let record = company("../../escaped", "Escaped Co").with("url", "https://escaped.test");

    let outcome = manager.acquire(&record).await;

    assert_eq!(
        outcome,
        LogoOutcome::Downloaded {
            filename: "escaped.png".to_string(),
            provider: 0,
            bytes: 3,
        }
    );
    assert!(logo_dir.join("escaped.png").exists());
    assert!(!temp.path().join("public").join("escaped.png").exists());
    assert_eq!(
        agg_logos::current_logos(&logo_dir).unwrap(),
        vec!["escaped.png"]
    );
}

#[test]
fn cleanup_removes_exactly_the_unneeded_file() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    for name in ["a.png", "b.png", "placeholder.svg"] {
        fs::write(temp.path().join(name), b"img").unwrap();
    }

    let report = cleanup_unused(
        temp.path(),
        &[company("a", "A")],
        "placeholder.svg",
        &[],
        false,
    )
    .unwrap();

    assert_eq!(report.removed, vec!["b.png"]);
    assert_eq!(report.kept, vec!["a.png", "placeholder.svg"]);
    assert!(!temp.path().join("b.png").exists());
}

#[tokio::test]
async fn process_updates_references_and_prunes() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let logo_dir = temp.path().join("logos");
    fs::create_dir(&logo_dir).unwrap();
    for name in ["aws-ai.png", "stale.png", "legacy.png", "placeholder.svg"] {
        fs::write(logo_dir.join(name), b"img").unwrap();
    }
    let fetcher = FakeFetcher::default().body("https://one.test/openai.com", b"openai");
    let manager = manager(&logo_dir, fetcher);

    let mut tools = vec![
        company("aws-ai", "AWS AI").with("logo", "/images/logos/aws-ai.png"),
        company("openai", "OpenAI").with("url", "https://openai.com"),
        Record::new().with("id", "nameless"),
    ];
    let mut agents = vec![company("writer", "Writing Agent").with("category", "ai-agents")];
    let mut visited = 0;

    let summary = manager
        .process(&mut tools, &mut agents, |_| visited += 1)
        .await
        .unwrap();

    assert_eq!(visited, 4);
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.existing, 1);
    assert_eq!(summary.downloaded, 1);
    assert_eq!(summary.placeholders, 1);
    assert_eq!(summary.cleanup.removed, vec!["stale.png"]);

    assert_eq!(tools[0].logo(), Some("images/logos/aws-ai.png"));
    assert_eq!(tools[1].logo(), Some("images/logos/openai.png"));
    assert_eq!(tools[2].logo(), None);
    assert_eq!(agents[0].logo(), Some("images/logos/placeholder.svg"));
    assert!(logo_dir.join("openai.png").exists());
    assert!(logo_dir.join("legacy.png").exists());
}

#[tokio::test]
async fn failing_company_does_not_stop_the_rest() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let fetcher = FakeFetcher::default()
        .body("https://one.test/alpha.test", b"alpha")
        .body("https://two.test/gamma.test", b"gamma");
    let manager = manager(temp.path(), fetcher);

    let mut tools = vec![
        company("alpha", "Alpha").with("url", "https://alpha.test"),
        company("broken", "Broken").with("url", "https://broken.test"),
        company("gamma", "Gamma").with("url", "https://gamma.test"),
    ];

    let summary = manager
        .process(&mut tools, &mut [], |_| {})
        .await
        .unwrap();

    assert_eq!(summary.processed, 3);
    assert_eq!(summary.downloaded, 2);
    assert_eq!(summary.placeholders, 1);
    assert_eq!(tools[0].logo(), Some("images/logos/alpha.png"));
    assert_eq!(tools[1].logo(), Some("images/logos/placeholder.svg"));
    assert_eq!(tools[2].logo(), Some("images/logos/gamma.png"));
    assert!(!temp.path().join("broken.png").exists());
    assert!(temp.path().join("gamma.png").exists());
}

#[tokio::test(start_paused = true)]
async fn delay_runs_between_named_companies_only() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    for name in ["alpha.png", "beta.png", "gamma.png"] {
        fs::write(temp.path().join(name), b"img").unwrap();
    }
    let manager = manager(temp.path(), FakeFetcher::default())
        .with_delay(Duration::from_millis(100));

    let mut tools = vec![
        company("alpha", "Alpha"),
        Record::new().with("id", "nameless"),
        company("beta", "Beta"),
    ];
    let mut agents = vec![company("gamma", "Gamma")];

    let started = tokio::time::Instant::now();
    let summary = manager
        .process(&mut tools, &mut agents, |_| {})
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(summary.existing, 3);
    assert_eq!(manager.fetcher().calls(), 0);
    assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(300), "{elapsed:?}");
}

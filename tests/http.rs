use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct WeeklyResponse {
    days: Vec<String>,
    scores: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    sleep_score: i64,
    burnout_prob: i64,
    burnout_hours: f64,
    peak_hours: String,
    suggestion: String,
    stability: i64,
    radar: Vec<f64>,
    weekly: Vec<i64>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/weekly")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_sleepwise"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_weekly(client: &Client, base_url: &str) -> WeeklyResponse {
    client
        .get(format!("{base_url}/api/weekly"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_index_serves_the_bare_form() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("SleepWise"));
    assert!(body.contains("<form method=\"POST\""));
    assert!(!body.contains("Sleep Quality Score"));
}

#[tokio::test]
async fn http_form_post_scores_and_updates_weekly() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/", server.base_url))
        .form(&[
            ("day", "Wednesday"),
            ("sleep", "8"),
            ("stress", "1"),
            ("screen", "1"),
            ("mood", "5"),
        ])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("93 / 100"));
    assert!(body.contains("7:30 AM – 11:00 AM"));

    let weekly = fetch_weekly(&client, &server.base_url).await;
    assert_eq!(weekly.days[2], "Wednesday");
    assert_eq!(weekly.scores[2], 93);
}

#[tokio::test]
async fn http_malformed_numbers_coerce_to_zero() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // stress fails to parse and scores as zero: 60 + 40 - 0 - 2 = 98
    let response = client
        .post(format!("{}/", server.base_url))
        .form(&[
            ("day", "Sunday"),
            ("sleep", "8"),
            ("stress", "plenty"),
            ("screen", "1"),
            ("mood", "5"),
        ])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let weekly = fetch_weekly(&client, &server.base_url).await;
    assert_eq!(weekly.scores[6], 98);
}

#[tokio::test]
async fn http_analyze_json_returns_full_report() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/analyze", server.base_url))
        .json(&serde_json::json!({
            "day": "Monday",
            "sleep": 8,
            "stress": 1,
            "screen": 1,
            "mood": 5
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let report: AnalyzeResponse = response.json().await.unwrap();
    assert_eq!(report.sleep_score, 93);
    assert_eq!(report.burnout_prob, 5);
    assert_eq!(report.burnout_hours, 11.2);
    assert_eq!(report.peak_hours, "7:30 AM – 11:00 AM");
    assert_eq!(
        report.suggestion,
        "Maintain this routine and increase deep-work blocks during peak hours."
    );
    assert_eq!(report.stability, 69);
    assert_eq!(report.radar, vec![96.0, 85.0, 100.0, 90.0, 5.0]);
    assert_eq!(report.weekly[0], 93);
}

#[tokio::test]
async fn http_analyze_without_day_leaves_weekly_untouched() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_weekly(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/analyze", server.base_url))
        .json(&serde_json::json!({
            "sleep": 4,
            "stress": 5,
            "screen": 6,
            "mood": 1
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let report: AnalyzeResponse = response.json().await.unwrap();
    assert!(report.burnout_hours >= 1.0);
    assert!((5..=100).contains(&report.burnout_prob));

    let after = fetch_weekly(&client, &server.base_url).await;
    assert_eq!(after.scores, before.scores);
}

#[tokio::test]
async fn http_analyze_rejects_unknown_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/analyze", server.base_url))
        .json(&serde_json::json!({ "day": "Funday", "sleep": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_resubmitting_the_same_day_is_idempotent() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let payload = serde_json::json!({
        "day": "Thursday",
        "sleep": 6.5,
        "stress": 2,
        "screen": 3,
        "mood": 4
    });

    let first: AnalyzeResponse = client
        .post(format!("{}/api/analyze", server.base_url))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let second: AnalyzeResponse = client
        .post(format!("{}/api/analyze", server.base_url))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first.sleep_score, second.sleep_score);
    assert_eq!(first.stability, second.stability);
    assert_eq!(first.suggestion, second.suggestion);
    assert_eq!(first.weekly, second.weekly);
}

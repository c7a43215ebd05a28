use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    _child: Option<Child>,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests.
        // Inherit environment so the server sees MONGODB_URI etc. from .env.
        let mut cmd = Command::new("target/debug/gadget-shop-api");
        cmd.env("PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            base_url,
            _child: Some(child),
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// Resolve a server to test against, or None to skip.
///
/// These tests need a running MongoDB, so they only run when opted in:
/// - GADGET_SHOP_TEST_URL points at an already-running server, or
/// - GADGET_SHOP_SPAWN_SERVER=1 spawns the built binary (MongoDB from env).
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    if std::env::var("GADGET_SHOP_TEST_URL").is_err()
        && std::env::var("GADGET_SHOP_SPAWN_SERVER").is_err()
    {
        eprintln!("skipping: set GADGET_SHOP_TEST_URL or GADGET_SHOP_SPAWN_SERVER to run");
        return Ok(None);
    }

    let server = SERVER.get_or_init(|| {
        if let Ok(base_url) = std::env::var("GADGET_SHOP_TEST_URL") {
            TestServer {
                base_url,
                _child: None,
            }
        } else {
            TestServer::spawn().expect("failed to spawn server binary")
        }
    });
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(Some(server))
}

/// Unique email per run so reruns don't collide on the dedup check
pub fn unique_email(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}+{}@shop.test", prefix, nanos)
}

use reqwest::Url;
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "npm_test_token";

/// A wiremock server answering the two registry endpoints the tool uses
pub struct FakeRegistry {
    server: MockServer,
}

impl FakeRegistry {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Registry base URL with trailing slash
    pub fn url(&self) -> Url {
        Url::parse(&format!("{}/", self.server.uri())).unwrap()
    }

    /// The `.npmrc` line carrying `TEST_TOKEN` for this registry
    pub fn npmrc_line(&self) -> String {
        let url = self.url();
        format!(
            "//{}:{}/:_authToken={}",
            url.host_str().unwrap(),
            url.port().unwrap(),
            TEST_TOKEN
        )
    }

    /// Writes `<dir>/.npmrc` with the token line for this registry
    pub fn write_npmrc(&self, dir: &Path) {
        let content = format!("registry={}\n{}\n", self.url(), self.npmrc_line());
        std::fs::write(dir.join(".npmrc"), content).unwrap();
    }

    pub async fn with_org(&self, org: &str, packages: &[&str]) {
        self.mount_org(org, packages, None).await;
    }

    /// Like `with_org`, but the response is held back for `delay`
    pub async fn with_delayed_org(&self, org: &str, packages: &[&str], delay: Duration) {
        self.mount_org(org, packages, Some(delay)).await;
    }

    async fn mount_org(&self, org: &str, packages: &[&str], delay: Option<Duration>) {
        let body: serde_json::Map<String, serde_json::Value> = packages
            .iter()
            .map(|name| (name.to_string(), json!("read")))
            .collect();

        let mut response = ResponseTemplate::new(200).set_body_json(body);
        if let Some(delay) = delay {
            response = response.set_delay(delay);
        }

        Mock::given(method("GET"))
            .and(path(format!("/-/org/{}/package", org)))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn with_org_status(&self, org: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/-/org/{}/package", org)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serves a packument whose latest version has `unpacked_size` bytes
    ///
    /// `url_path` is the already-escaped path, e.g. `/@acme%2Fcore`.
    pub async fn with_package(&self, url_path: &str, unpacked_size: u64) {
        self.mount_package(url_path, unpacked_size, None).await;
    }

    /// Like `with_package`, but the response is held back for `delay`
    pub async fn with_delayed_package(&self, url_path: &str, unpacked_size: u64, delay: Duration) {
        self.mount_package(url_path, unpacked_size, Some(delay)).await;
    }

    async fn mount_package(&self, url_path: &str, unpacked_size: u64, delay: Option<Duration>) {
        let mut response = ResponseTemplate::new(200).set_body_json(json!({
            "dist-tags": { "latest": "2.0.0" },
            "versions": {
                "1.0.0": { "dist": { "unpackedSize": 1 } },
                "2.0.0": { "dist": { "unpackedSize": unpacked_size } }
            }
        }));
        if let Some(delay) = delay {
            response = response.set_delay(delay);
        }

        Mock::given(method("GET"))
            .and(path(url_path))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn with_package_status(&self, url_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn received_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

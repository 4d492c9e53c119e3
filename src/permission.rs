use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use texting_robots::Robot;
use url::Url;

use crate::error::RobotsError;
use crate::target::TargetUrl;

/// What a site's robots document says
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsPolicy {
    /// Raw robots.txt body to evaluate
    Rules(String),
    /// Access to the document itself was refused (401/403)
    DisallowAll,
}

/// Retrieves robots documents
#[async_trait]
pub trait RobotsSource: Send + Sync {
    async fn retrieve(&self, robots_url: &Url) -> Result<RobotsPolicy, RobotsError>;
}

/// Robots source making one bounded GET per lookup
pub struct HttpRobotsSource {
    client: Client,
    timeout: Duration,
}

impl HttpRobotsSource {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl RobotsSource for HttpRobotsSource {
    async fn retrieve(&self, robots_url: &Url) -> Result<RobotsPolicy, RobotsError> {
        ::log::debug!("Retrieving {}", robots_url);

        let response = self
            .client
            .get(robots_url.clone())
            .timeout(self.timeout)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(RobotsPolicy::DisallowAll),
            status if status.is_success() => Ok(RobotsPolicy::Rules(response.text().await?)),
            status => Err(RobotsError::Status(status)),
        }
    }
}

/// Decides whether a path may be scraped, failing open when the robots
/// document is unavailable
pub struct PermissionCheck {
    source: Box<dyn RobotsSource>,
}

impl PermissionCheck {
    pub fn new(source: Box<dyn RobotsSource>) -> Self {
        Self { source }
    }

    /// Whether `user_agent` may fetch `path` on the target's site
    pub async fn is_allowed(&self, target: &TargetUrl, user_agent: &str, path: &str) -> bool {
        let robots_url = match target.robots_url() {
            Ok(url) => url,
            Err(e) => {
                ::log::warn!("No robots location for {}, assuming allowed: {}", target, e);
                return true;
            }
        };

        let policy = match self.source.retrieve(&robots_url).await {
            Ok(policy) => policy,
            Err(e) => {
                ::log::warn!("{} unavailable, assuming allowed: {}", robots_url, e);
                return true;
            }
        };

        match evaluate(&policy, user_agent, path) {
            Ok(allowed) => {
                ::log::debug!(
                    "{} {} {} for {}",
                    robots_url,
                    if allowed { "allows" } else { "disallows" },
                    path,
                    user_agent
                );
                allowed
            }
            Err(e) => {
                ::log::warn!("{} unusable, assuming allowed: {}", robots_url, e);
                true
            }
        }
    }
}

/// Product token robots rules are matched against ("NewsScraper/1.0" -> "NewsScraper")
pub fn agent_token(user_agent: &str) -> &str {
    user_agent.split('/').next().unwrap_or(user_agent).trim()
}

/// Evaluates a retrieved policy for one agent and path
pub fn evaluate(policy: &RobotsPolicy, user_agent: &str, path: &str) -> Result<bool, RobotsError> {
    match policy {
        RobotsPolicy::DisallowAll => Ok(false),
        RobotsPolicy::Rules(body) => {
            let robot = Robot::new(agent_token(user_agent), body.as_bytes())
                .map_err(|e| RobotsError::Parse(e.to_string()))?;
            Ok(robot.allowed(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port, serve_once, serve_silence};

    const AGENT: &str = "NewsScraper/1.0";

    const RULES: &str = "User-agent: *\nDisallow: /private\n\nUser-agent: NewsScraper\nDisallow: /members\n";

    enum Failure {
        Status(u16),
        Unparsable,
    }

    struct StubSource(Result<RobotsPolicy, Failure>);

    #[async_trait]
    impl RobotsSource for StubSource {
        async fn retrieve(&self, _robots_url: &Url) -> Result<RobotsPolicy, RobotsError> {
            match &self.0 {
                Ok(policy) => Ok(policy.clone()),
                Err(Failure::Status(code)) => {
                    Err(RobotsError::Status(StatusCode::from_u16(*code).unwrap()))
                }
                Err(Failure::Unparsable) => Err(RobotsError::Parse("unexpected token".into())),
            }
        }
    }

    fn check(result: Result<RobotsPolicy, Failure>) -> PermissionCheck {
        PermissionCheck::new(Box::new(StubSource(result)))
    }

    fn http_check() -> PermissionCheck {
        http_check_with_timeout(Duration::from_secs(5))
    }

    fn http_check_with_timeout(timeout: Duration) -> PermissionCheck {
        let client = Client::builder().no_proxy().build().unwrap();
        PermissionCheck::new(Box::new(HttpRobotsSource::new(client, timeout)))
    }

    fn target(base: &str) -> TargetUrl {
        TargetUrl::parse(&format!("{}/members/area", base)).unwrap()
    }

    #[test]
    fn test_agent_token() {
        assert_eq!(agent_token("NewsScraper/1.0"), "NewsScraper");
        assert_eq!(agent_token("plainbot"), "plainbot");
    }

    #[test]
    fn test_evaluate_rules() {
        let policy = RobotsPolicy::Rules(RULES.to_string());
        assert!(!evaluate(&policy, AGENT, "/members/area").unwrap());
        assert!(evaluate(&policy, AGENT, "/news").unwrap());
        assert!(!evaluate(&policy, "OtherBot/2.0", "/private/x").unwrap());
        assert!(evaluate(&policy, "OtherBot/2.0", "/members/area").unwrap());
    }

    #[tokio::test]
    async fn test_stubbed_rules_are_applied() {
        let target = TargetUrl::parse("example.com/members/area").unwrap();
        let check = check(Ok(RobotsPolicy::Rules(RULES.to_string())));
        assert!(!check.is_allowed(&target, AGENT, target.path()).await);
        assert!(check.is_allowed(&target, AGENT, "/news").await);
    }

    #[tokio::test]
    async fn test_unavailable_document_fails_open() {
        let target = TargetUrl::parse("example.com/members/area").unwrap();
        assert!(check(Err(Failure::Status(500))).is_allowed(&target, AGENT, target.path()).await);
    }

    #[tokio::test]
    async fn test_unparsable_document_fails_open() {
        let target = TargetUrl::parse("example.com/members/area").unwrap();
        assert!(check(Err(Failure::Unparsable)).is_allowed(&target, AGENT, target.path()).await);
    }

    #[tokio::test]
    async fn test_slow_robots_document_fails_open() {
        let base = serve_silence().await;
        let target = target(&base);
        let check = http_check_with_timeout(Duration::from_millis(200));

        let started = std::time::Instant::now();
        assert!(check.is_allowed(&target, AGENT, target.path()).await);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_garbage_document_is_allowed() {
        let (base, _request) = serve_once("200 OK", "<html>\0\u{1}not robots</html>").await;
        let target = target(&base);
        assert!(http_check().is_allowed(&target, AGENT, target.path()).await);
    }

    #[tokio::test]
    async fn test_opaque_origin_fails_open() {
        let target = TargetUrl::parse("custom://feeds.example.com/news").unwrap();
        let check = check(Ok(RobotsPolicy::DisallowAll));
        assert!(check.is_allowed(&target, AGENT, target.path()).await);
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_open() {
        let base = closed_port().await;
        let target = target(&base);
        assert!(http_check().is_allowed(&target, AGENT, target.path()).await);
    }

    #[tokio::test]
    async fn test_missing_document_fails_open() {
        let (base, _request) = serve_once("404 Not Found", "").await;
        let target = target(&base);
        assert!(http_check().is_allowed(&target, AGENT, target.path()).await);
    }

    #[tokio::test]
    async fn test_forbidden_document_disallows() {
        let (base, _request) = serve_once("403 Forbidden", "").await;
        let target = target(&base);
        assert!(!http_check().is_allowed(&target, AGENT, target.path()).await);
    }

    #[tokio::test]
    async fn test_served_rules_are_requested_from_root() {
        let (base, request) = serve_once("200 OK", RULES).await;
        let target = target(&base);

        assert!(!http_check().is_allowed(&target, AGENT, target.path()).await);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /robots.txt "));
    }
}

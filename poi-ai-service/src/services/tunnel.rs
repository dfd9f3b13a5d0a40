//! Optional public exposure through an ngrok tunnel.
//!
//! The `ngrok` agent is launched as a child process for the service port;
//! its local inspection API is polled for the public https URL. Every failure
//! here is logged and swallowed: without a tunnel the API stays local.

use crate::config::TunnelConfig;
use serde::Deserialize;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::{Child, Command};

const POLL_ATTEMPTS: u32 = 20;

/// The agent reads its token from the environment, keeping it out of the
/// process list.
const AUTH_TOKEN_ENV: &str = "NGROK_AUTHTOKEN";
const POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum TunnelError {
    #[error("Failed to launch ngrok agent: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("ngrok agent did not report a public URL")]
    NoPublicUrl,
}

/// A running tunnel. Dropping it stops the agent.
#[derive(Debug)]
pub struct Tunnel {
    pub public_url: String,
    _agent: Child,
}

#[derive(Debug, Deserialize)]
struct TunnelList {
    #[serde(default)]
    tunnels: Vec<TunnelInfo>,
}

#[derive(Debug, Deserialize)]
struct TunnelInfo {
    public_url: String,
    #[serde(default)]
    proto: String,
}

/// Start a tunnel to `port` if an auth token is configured.
pub async fn start(config: &TunnelConfig, port: u16) -> Option<Tunnel> {
    let Some(token) = config.auth_token.as_deref().filter(|t| !t.is_empty()) else {
        tracing::warn!("NGROK_AUTH_TOKEN not set. API will only be accessible locally.");
        return None;
    };

    match open(config, token, port).await {
        Ok(tunnel) => {
            tracing::info!(public_url = %tunnel.public_url, "ngrok tunnel active");
            if let Err(e) = tokio::fs::write(&config.url_file, &tunnel.public_url).await {
                tracing::warn!(file = %config.url_file, error = %e, "Failed to save tunnel URL");
            } else {
                tracing::info!(file = %config.url_file, "Tunnel URL saved");
            }
            Some(tunnel)
        }
        Err(e) => {
            tracing::error!(error = %e, "ngrok tunnel unavailable");
            None
        }
    }
}

async fn open(config: &TunnelConfig, token: &str, port: u16) -> Result<Tunnel, TunnelError> {
    let agent = agent_command(config, token, port).spawn()?;

    let client = reqwest::Client::new();
    let url = format!("{}/api/tunnels", config.agent_api_url.trim_end_matches('/'));

    for attempt in 1..=POLL_ATTEMPTS {
        tokio::time::sleep(POLL_INTERVAL).await;

        let list = match client.get(&url).send().await {
            Ok(response) => response.json::<TunnelList>().await.ok(),
            Err(e) => {
                tracing::debug!(attempt, error = %e, "ngrok agent API not reachable yet");
                None
            }
        };

        if let Some(public_url) = list.and_then(|l| https_url(&l)) {
            return Ok(Tunnel {
                public_url,
                _agent: agent,
            });
        }
    }

    Err(TunnelError::NoPublicUrl)
}

fn agent_command(config: &TunnelConfig, token: &str, port: u16) -> Command {
    let mut command = Command::new(&config.agent_binary);
    command
        .arg("http")
        .arg(port.to_string())
        .arg("--log")
        .arg("stdout")
        .env(AUTH_TOKEN_ENV, token)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    command
}

fn https_url(list: &TunnelList) -> Option<String> {
    list.tunnels
        .iter()
        .find(|t| t.proto == "https" || t.public_url.starts_with("https://"))
        .map(|t| t.public_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: Option<&str>) -> TunnelConfig {
        TunnelConfig {
            auth_token: token.map(str::to_string),
            agent_binary: "ngrok-binary-that-does-not-exist".to_string(),
            agent_api_url: "http://127.0.0.1:4040".to_string(),
            url_file: "ngrok_url.txt".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_token_disables_tunnel() {
        assert!(start(&config(None), 7860).await.is_none());
        assert!(start(&config(Some("")), 7860).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_agent_binary_does_not_fail_startup() {
        assert!(start(&config(Some("token")), 7860).await.is_none());
    }

    #[test]
    fn test_auth_token_is_passed_through_environment() {
        let command = agent_command(&config(Some("secret-token")), "secret-token", 7860);
        let std_command = command.as_std();

        assert!(std_command.get_args().all(|arg| arg != "secret-token"));
        assert!(std_command
            .get_envs()
            .any(|(key, value)| key == AUTH_TOKEN_ENV && value == Some(std::ffi::OsStr::new("secret-token"))));
    }

    #[test]
    fn test_picks_https_tunnel() {
        let list: TunnelList = serde_json::from_str(
            r#"{"tunnels": [
                {"public_url": "http://abc.ngrok.io", "proto": "http"},
                {"public_url": "https://abc.ngrok.io", "proto": "https"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(https_url(&list).as_deref(), Some("https://abc.ngrok.io"));
    }

    #[test]
    fn test_empty_tunnel_list() {
        let list: TunnelList = serde_json::from_str("{}").unwrap();
        assert!(https_url(&list).is_none());
    }
}

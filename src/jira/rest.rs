//! JIRA REST API client
//!
//! Thin plumbing over three endpoints:
//! - `POST /rest/auth/1/session` — login, returns the session cookie
//! - `GET /rest/api/2/project/{key}/versions` — existing versions
//! - `POST /rest/api/2/version` — create one version
//!
//! HTTP 401/403 responses map to `SyncError::Auth` so the resilient writer
//! can re-authenticate; everything else maps to `SyncError::Tracker`.

use crate::core::error::{SyncError, SyncResult};
use crate::jira::{SessionToken, TrackerClient, TrackerVersionEntry};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub struct JiraRestClient {
  base_url: String,
  http: Client,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
  username: &'a str,
  password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
  session: SessionInfo,
}

#[derive(Deserialize)]
struct SessionInfo {
  name: String,
  value: String,
}

#[derive(Deserialize)]
struct RemoteVersion {
  name: String,
}

#[derive(Serialize)]
struct CreateVersionRequest<'a> {
  name: &'a str,
  project: &'a str,
  released: bool,
  #[serde(rename = "releaseDate")]
  release_date: String,
}

impl JiraRestClient {
  pub fn new(base_url: impl Into<String>) -> SyncResult<Self> {
    let base_url = base_url.into();
    let base_url = base_url.trim_end_matches('/').to_string();
    let http = Client::builder()
      .user_agent(concat!("jira-version-sync/", env!("CARGO_PKG_VERSION")))
      .build()?;
    Ok(Self { base_url, http })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  /// Map non-success responses into the error taxonomy
  fn check(response: Response) -> SyncResult<Response> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = format!("{}: {}", status, body.chars().take(500).collect::<String>());
    match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SyncError::auth(message)),
      _ => Err(SyncError::tracker(message)),
    }
  }
}

impl TrackerClient for JiraRestClient {
  fn login(&self, username: &str, password: &str) -> SyncResult<SessionToken> {
    let response = self
      .http
      .post(self.url("/rest/auth/1/session"))
      .json(&LoginRequest { username, password })
      .send()?;

    let response = Self::check(response).map_err(|e| match e {
      // A rejected login is still an auth failure for the retry loop
      SyncError::Tracker { message } => SyncError::auth(message),
      other => other,
    })?;

    let login: LoginResponse = response.json()?;
    Ok(SessionToken(format!("{}={}", login.session.name, login.session.value)))
  }

  fn versions(&self, token: &SessionToken, project_key: &str) -> SyncResult<Vec<String>> {
    let response = self
      .http
      .get(self.url(&format!("/rest/api/2/project/{}/versions", project_key)))
      .header(reqwest::header::COOKIE, token.0.as_str())
      .send()?;

    let versions: Vec<RemoteVersion> = Self::check(response)?.json()?;
    Ok(versions.into_iter().map(|v| v.name).collect())
  }

  fn add_version(&self, token: &SessionToken, project_key: &str, entry: &TrackerVersionEntry) -> SyncResult<()> {
    let request = CreateVersionRequest {
      name: &entry.name,
      project: project_key,
      released: entry.released,
      release_date: entry.release_date.format("%Y-%m-%d").to_string(),
    };

    let response = self
      .http
      .post(self.url("/rest/api/2/version"))
      .header(reqwest::header::COOKIE, token.0.as_str())
      .json(&request)
      .send()?;

    Self::check(response)?;
    Ok(())
  }
}

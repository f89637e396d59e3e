// src/core/reservation.rs
use anyhow::{Context as _, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

/// Lowercased file path -> login of the person who reserved it.
pub type ReservationMap = HashMap<String, String>;

/// Issue tracker polled for reservation issues.
pub const RESERVATION_ENDPOINT: &str =
    "https://api.github.com/repos/python/python-docs-fr/issues";

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub title: String,
    pub user: IssueUser,
}

#[derive(Debug, Deserialize)]
pub struct IssueUser {
    pub login: String,
}

/// Fetches the open reservation issues and maps them to reserved files.
///
/// This is a single blocking call made once, before any filtering starts.
/// There is no retry and no partial result: the caller aborts on failure
/// rather than report with an incomplete map.
///
/// # Errors
///
/// This function may return an error if the HTTP request fails or the
/// response is not the expected JSON shape.
pub fn fetch_reservations(url: &str) -> Result<ReservationMap> {
    let issues: Vec<Issue> = ureq::get(url)
        .call()
        .with_context(|| format!("Failed to fetch reservations from {url}"))?
        .into_json()
        .context("Failed to decode reservation issues")?;
    debug!("fetched {} reservation issues", issues.len());
    Ok(reservation_map(&issues))
}

/// Maps each issue to a reservation: the last whitespace-separated token of
/// the title names the file, the issue author is the reserver.
#[must_use]
pub fn reservation_map(issues: &[Issue]) -> ReservationMap {
    let mut reservations = ReservationMap::new();
    for issue in issues {
        if let Some(target) = issue.title.split_whitespace().last() {
            reservations.insert(target.to_lowercase(), issue.user.login.clone());
        }
    }
    reservations
}

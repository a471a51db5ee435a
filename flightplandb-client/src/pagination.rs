//! Lazy pagination over listing endpoints.
//!
//! The service is inconsistent about declaring pagination, so the client
//! always behaves as if it is in effect: an initial request discovers the
//! `X-Page-Count` header (defaulting to one page when absent), then pages
//! are fetched strictly in increasing order, never overlapped, and records
//! are yielded one at a time until the caller's limit is reached — mid-page
//! if necessary. A page is only ever requested once the previous page's
//! records have been consumed, so dropping the stream early means later
//! pages are simply never fetched.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use futures::stream::{self, Stream};
use serde_json::Value;
use tracing::debug;

use crate::client::FlightPlanDb;
use crate::error::Error;

// ============================================================================
// Sort orders
// ============================================================================

/// Sort order for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// By creation time (the service default).
    #[default]
    Created,
    /// By last edit time.
    Updated,
    /// By relative popularity.
    Popularity,
    /// By route distance.
    Distance,
}

impl SortOrder {
    /// All valid sort orders.
    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::Created,
            SortOrder::Updated,
            SortOrder::Popularity,
            SortOrder::Distance,
        ]
    }

    /// The wire form of this sort order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Created => "created",
            SortOrder::Updated => "updated",
            SortOrder::Popularity => "popularity",
            SortOrder::Distance => "distance",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::all()
            .iter()
            .find(|order| order.as_str() == s)
            .copied()
            .ok_or_else(|| Error::InvalidSortOrder(s.to_string()))
    }
}

// ============================================================================
// Page stream
// ============================================================================

struct PageState {
    page: u32,
    page_count: Option<u32>,
    yielded: usize,
    buffer: VecDeque<Value>,
}

/// Streams the raw records of a paginated endpoint, in server order, up to
/// `limit` records.
///
/// Every page fetch goes through the client's request pipeline, so the
/// header cache and the status mapping apply to each page individually.
pub(crate) fn page_stream(
    client: FlightPlanDb,
    path: String,
    mut params: Vec<(String, String)>,
    sort: SortOrder,
    limit: usize,
) -> impl Stream<Item = Result<Value, Error>> + Send {
    params.push(("sort".to_string(), sort.as_str().to_string()));

    let state = PageState {
        page: 0,
        page_count: None,
        yielded: 0,
        buffer: VecDeque::new(),
    };

    stream::try_unfold(state, move |mut state| {
        let client = client.clone();
        let path = path.clone();
        let params = params.clone();
        async move {
            loop {
                if state.yielded >= limit {
                    return Ok(None);
                }
                if let Some(record) = state.buffer.pop_front() {
                    state.yielded += 1;
                    return Ok(Some((record, state)));
                }

                let page_count = match state.page_count {
                    Some(count) => count,
                    None => {
                        // Discovery request; its body is discarded.
                        let response = client.get_with(&path, params.clone(), &[]).await?;
                        let count = response
                            .header("X-Page-Count")
                            .and_then(|value| value.parse().ok())
                            .unwrap_or(1);
                        debug!(path = %path, pages = count, "Pagination discovered");
                        state.page_count = Some(count);
                        count
                    }
                };

                if state.page >= page_count {
                    return Ok(None);
                }

                let mut query = params.clone();
                query.push(("page".to_string(), state.page.to_string()));
                let response = client.get_with(&path, query, &[]).await?;
                state.page += 1;
                state.buffer = VecDeque::from(response.json::<Vec<Value>>()?);
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_orders_roundtrip() {
        for order in SortOrder::all() {
            assert_eq!(SortOrder::from_str(order.as_str()).unwrap(), *order);
        }
        assert_eq!(SortOrder::default(), SortOrder::Created);
    }

    #[test]
    fn unknown_sort_order_fails_before_any_io() {
        let err = SortOrder::from_str("likes").unwrap_err();
        assert!(matches!(err, Error::InvalidSortOrder(ref order) if order == "likes"));
    }
}

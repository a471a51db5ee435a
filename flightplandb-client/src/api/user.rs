//! User profile and listing operations.
//!
//! # Endpoints
//!
//! ```text
//! GET /me                     me
//! GET /user/{username}        fetch
//! GET /user/{username}/plans  plans (paginated)
//! GET /user/{username}/likes  likes (paginated)
//! GET /search/users           search (paginated)
//! ```

use futures::stream::{Stream, StreamExt};

use flightplandb_core::{Plan, User, UserSmall};

use crate::api::plan::into_record;
use crate::client::FlightPlanDb;
use crate::error::Error;
use crate::pagination::{page_stream, SortOrder};

/// User profile and listing operations.
#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    pub(crate) client: &'a FlightPlanDb,
}

impl UserApi<'_> {
    /// Fetches the profile of the currently authenticated user. Requires
    /// authentication.
    ///
    /// # Errors
    ///
    /// [`Error::Unauthorized`] when authentication fails.
    pub async fn me(&self) -> Result<User, Error> {
        self.client.get("/me").await?.json()
    }

    /// Fetches the profile of any registered user.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no user has this username.
    pub async fn fetch(&self, username: &str) -> Result<User, Error> {
        self.client.get(&format!("/user/{username}")).await?.json()
    }

    /// Lazily lists the flight plans created by a user.
    pub fn plans(
        &self,
        username: &str,
        sort: SortOrder,
        limit: usize,
    ) -> impl Stream<Item = Result<Plan, Error>> + Send {
        page_stream(
            self.client.clone(),
            format!("/user/{username}/plans"),
            Vec::new(),
            sort,
            limit,
        )
        .map(into_record::<Plan>)
    }

    /// Lazily lists the flight plans liked by a user.
    pub fn likes(
        &self,
        username: &str,
        sort: SortOrder,
        limit: usize,
    ) -> impl Stream<Item = Result<Plan, Error>> + Send {
        page_stream(
            self.client.clone(),
            format!("/user/{username}/likes"),
            Vec::new(),
            sort,
            limit,
        )
        .map(into_record::<Plan>)
    }

    /// Searches for users by approximate username.
    ///
    /// Returns the reduced [`UserSmall`] shape; use [`UserApi::fetch`] for
    /// a full profile.
    pub fn search(
        &self,
        username: &str,
        limit: usize,
    ) -> impl Stream<Item = Result<UserSmall, Error>> + Send {
        page_stream(
            self.client.clone(),
            "/search/users".to_string(),
            vec![("q".to_string(), username.to_string())],
            SortOrder::default(),
            limit,
        )
        .map(into_record::<UserSmall>)
    }
}

//! Flight plan operations.
//!
//! # Endpoints
//!
//! ```text
//! GET    /plan/{id}            fetch, export
//! POST   /plan/                create
//! PATCH  /plan/{id}            edit
//! DELETE /plan/{id}            delete
//! GET    /search/plans         search (paginated)
//! GET    /plan/{id}/like       has_liked
//! POST   /plan/{id}/like       like
//! DELETE /plan/{id}/like       unlike
//! POST   /auto/generate        generate
//! POST   /auto/decode          decode
//! ```

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use serde_json::{json, Value};

use flightplandb_core::{GenerateQuery, Plan, PlanQuery, StatusResponse};

use crate::client::{bool_param, FlightPlanDb};
use crate::error::Error;
use crate::format::{BodyKind, ExportFormat};
use crate::pagination::{page_stream, SortOrder};
use crate::transport::ApiRequest;

/// A plan in a caller-selected export format.
#[derive(Debug, Clone)]
pub enum PlanExport {
    /// The typed plan, for the native format.
    Plan(Box<Plan>),
    /// Decoded body text, for textual export formats.
    Text(String),
    /// Raw body bytes, for PDF.
    Binary(Bytes),
}

/// Flight plan operations.
#[derive(Debug, Clone, Copy)]
pub struct PlanApi<'a> {
    pub(crate) client: &'a FlightPlanDb,
}

impl PlanApi<'_> {
    /// Fetches a flight plan by id.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no plan with this id exists.
    pub async fn fetch(&self, id: i64) -> Result<Plan, Error> {
        self.client.get(&format!("/plan/{id}")).await?.json()
    }

    /// Fetches a flight plan by id in a specific export format.
    ///
    /// The response body is parsed, passed through as text, or passed
    /// through as bytes depending on the format's [`BodyKind`].
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no plan with this id exists.
    pub async fn export(&self, id: i64, format: ExportFormat) -> Result<PlanExport, Error> {
        let mut request = ApiRequest::get(format!("/plan/{id}"));
        request.accept = format.media_type();
        let response = self.client.request(request, &[]).await?;

        Ok(match format.body_kind() {
            BodyKind::Structured => PlanExport::Plan(Box::new(response.json()?)),
            BodyKind::Text => PlanExport::Text(response.text()),
            BodyKind::Binary => PlanExport::Binary(response.body),
        })
    }

    /// Creates a new flight plan. Requires authentication.
    ///
    /// Returns the plan as registered, with the server-assigned fields
    /// (id, timestamps, cycle) filled in.
    ///
    /// # Errors
    ///
    /// [`Error::BadRequest`] for an unusable plan and
    /// [`Error::Unauthorized`] without a valid key.
    pub async fn create(&self, plan: &Plan) -> Result<Plan, Error> {
        let body = serde_json::to_value(plan)?;
        self.client.post("/plan/", Some(body)).await?.json()
    }

    /// Replaces a flight plan linked to your account. Requires
    /// authentication.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPlanId`] when the plan has no id yet, and
    /// [`Error::NotFound`] when no plan with that id exists.
    pub async fn edit(&self, plan: &Plan) -> Result<Plan, Error> {
        let id = plan.id.ok_or(Error::MissingPlanId)?;
        let body = serde_json::to_value(plan)?;
        self.client.patch(&format!("/plan/{id}"), body).await?.json()
    }

    /// Deletes a flight plan linked to your account. Requires
    /// authentication.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no plan with this id exists.
    pub async fn delete(&self, id: i64) -> Result<StatusResponse, Error> {
        self.client.delete(&format!("/plan/{id}")).await?.json()
    }

    /// Searches for flight plans, lazily walking the paginated results.
    ///
    /// Requires authentication if the route is included in the results.
    /// `include_route` travels as the string `"true"`/`"false"`.
    pub fn search(
        &self,
        query: &PlanQuery,
        sort: SortOrder,
        include_route: bool,
        limit: usize,
    ) -> impl Stream<Item = Result<Plan, Error>> + Send {
        let mut params: Vec<(String, String)> = query
            .to_query_pairs()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        params.push(("includeRoute".to_string(), bool_param(include_route).to_string()));

        page_stream(
            self.client.clone(),
            "/search/plans".to_string(),
            params,
            sort,
            limit,
        )
        .map(into_record::<Plan>)
    }

    /// Fetches your like status for a flight plan. Requires authentication.
    ///
    /// A 404 here is a valid "not liked" answer, not an error.
    pub async fn has_liked(&self, id: i64) -> Result<bool, Error> {
        let response = self
            .client
            .get_with(&format!("/plan/{id}/like"), Vec::new(), &[404])
            .await?;
        let status: StatusResponse = response.json()?;
        Ok(status.message != "Not Found")
    }

    /// Likes a flight plan. Requires authentication.
    ///
    /// `message: "Created"` means newly liked; `"OK"` means it already was.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no plan with this id exists. The service is
    /// known to answer 500 instead of 404 for some absent plans; that
    /// surfaces unchanged as [`Error::InternalServer`].
    pub async fn like(&self, id: i64) -> Result<StatusResponse, Error> {
        self.client
            .post(&format!("/plan/{id}/like"), None)
            .await?
            .json()
    }

    /// Removes a flight plan like. Requires authentication.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the plan does not exist or was not liked.
    pub async fn unlike(&self, id: i64) -> Result<bool, Error> {
        self.client.delete(&format!("/plan/{id}/like")).await?;
        Ok(true)
    }

    /// Creates a new flight plan with the automatic route generator.
    /// Requires authentication.
    pub async fn generate(
        &self,
        query: &GenerateQuery,
        include_route: bool,
    ) -> Result<Plan, Error> {
        let mut body = serde_json::to_value(query)?;
        // The generate endpoint rejects a native boolean here.
        body["includeRoute"] = Value::String(bool_param(include_route).to_string());
        self.client.post("/auto/generate", Some(body)).await?.json()
    }

    /// Creates a new flight plan from a waypoint string via the route
    /// decoder. Requires authentication.
    ///
    /// `route` is a comma or space separated list of waypoints, beginning
    /// and ending with valid airport ICAOs. Airways are supported when
    /// preceded and followed by waypoints on the airway; unmatched
    /// waypoints are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::BadRequest`] for an undecodable route.
    pub async fn decode(&self, route: &str) -> Result<Plan, Error> {
        let body = json!({ "route": route });
        self.client.post("/auto/decode", Some(body)).await?.json()
    }
}

/// Converts a raw paginated record into a typed entity.
pub(crate) fn into_record<T: serde::de::DeserializeOwned>(
    record: Result<Value, Error>,
) -> Result<T, Error> {
    record.and_then(|value| serde_json::from_value(value).map_err(Error::from))
}

//! End-to-end pipeline tests over a scripted transport.
//!
//! A [`MockTransport`] plays back canned responses in order and records
//! every request it sees, so these tests drive the full request pipeline
//! (auth, format negotiation, status mapping, pagination, header cache)
//! without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{TimeZone, Utc};
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{json, Value};

use flightplandb_client::{
    ApiRequest, ApiResponse, Error, ExportFormat, FlightPlanDb, PlanExport, SortOrder, Transport,
    Units,
};
use flightplandb_core::PlanQuery;

// ============================================================================
// Scripted transport
// ============================================================================

#[derive(Debug, Default)]
struct MockTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    fn scripted(responses: Vec<ApiResponse>) -> Arc<Self> {
        Arc::new(MockTransport {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(Error::UnrecognizedStatus(0))
    }
}

fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    map
}

fn json_response(status: u16, body: &Value) -> ApiResponse {
    ApiResponse {
        status,
        headers: HeaderMap::new(),
        body: Bytes::from(serde_json::to_vec(body).unwrap()),
    }
}

fn response_with(status: u16, header_pairs: &[(&str, &str)], body: &Value) -> ApiResponse {
    ApiResponse {
        status,
        headers: headers(header_pairs),
        body: Bytes::from(serde_json::to_vec(body).unwrap()),
    }
}

fn plan_62373() -> Value {
    json!({
        "id": 62373,
        "fromICAO": "KSAN",
        "toICAO": "KDEN",
        "fromName": "San Diego Intl",
        "toName": "Denver Intl",
        "flightNumber": null,
        "distance": 757.33,
        "maxAltitude": 0.0,
        "waypoints": 2,
        "likes": 0,
        "downloads": 1,
        "popularity": 1,
        "notes": "",
        "encodedPolyline": "_dgjEnyxcU_gyyAix`t@",
        "createdAt": "2015-08-04T20:48:08.000Z",
        "updatedAt": "2015-08-04T20:48:08.000Z",
        "tags": ["generated"],
        "user": {
            "id": 2429,
            "username": "example",
            "location": null
        }
    })
}

// ============================================================================
// Plans
// ============================================================================

#[tokio::test]
async fn fetch_plan_decodes_the_full_shape() {
    let transport = MockTransport::scripted(vec![json_response(200, &plan_62373())]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let plan = client.plan().fetch(62373).await.unwrap();
    assert_eq!(plan.id, Some(62373));
    assert_eq!(plan.from_icao.as_deref(), Some("KSAN"));
    assert_eq!(plan.to_icao.as_deref(), Some("KDEN"));
    assert_eq!(
        plan.created_at,
        Some(Utc.with_ymd_and_hms(2015, 8, 4, 20, 48, 8).unwrap())
    );
    let user = plan.user.unwrap();
    assert_eq!(user.id, 2429);
    assert_eq!(user.username, "example");

    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/plan/62373");
    assert_eq!(requests[0].accept, "application/vnd.fpd.v1+json");
    assert!(requests[0].authorization.is_none());
}

#[tokio::test]
async fn authenticated_requests_carry_basic_credentials() {
    let transport = MockTransport::scripted(vec![json_response(200, &plan_62373())]);
    let client = FlightPlanDb::with_transport(transport.clone(), Some("qwertyuiop".to_string()));

    client.plan().fetch(62373).await.unwrap();

    let requests = transport.recorded();
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Basic cXdlcnR5dWlvcDo=")
    );
}

#[tokio::test]
async fn export_passes_textual_bodies_through_undecoded() {
    let body = "I\n1100 Version\nCYCLE 1710\n";
    let transport = MockTransport::scripted(vec![ApiResponse {
        status: 200,
        headers: HeaderMap::new(),
        body: Bytes::from_static(body.as_bytes()),
    }]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let export = client
        .plan()
        .export(62373, ExportFormat::Xplane)
        .await
        .unwrap();
    match export {
        PlanExport::Text(text) => assert_eq!(text, body),
        other => panic!("expected text export, got {other:?}"),
    }

    let requests = transport.recorded();
    assert_eq!(
        requests[0].accept,
        "application/vnd.fpd.export.v1.xplane"
    );
}

#[tokio::test]
async fn edit_refuses_a_plan_without_an_id() {
    let transport = MockTransport::scripted(vec![]);
    let client = FlightPlanDb::with_transport(transport.clone(), Some("key".to_string()));

    let plan = flightplandb_core::Plan::default();
    let err = client.plan().edit(&plan).await.unwrap_err();
    assert!(matches!(err, Error::MissingPlanId));
    assert!(transport.recorded().is_empty());
}

#[tokio::test]
async fn has_liked_treats_not_found_as_false() {
    let transport = MockTransport::scripted(vec![json_response(
        404,
        &json!({"message": "Not Found", "errors": null}),
    )]);
    let client = FlightPlanDb::with_transport(transport.clone(), Some("key".to_string()));

    assert!(!client.plan().has_liked(62373).await.unwrap());
    assert_eq!(transport.recorded()[0].path, "/plan/62373/like");
}

#[tokio::test]
async fn has_liked_treats_ok_as_true() {
    let transport = MockTransport::scripted(vec![json_response(
        200,
        &json!({"message": "OK", "errors": null}),
    )]);
    let client = FlightPlanDb::with_transport(transport, Some("key".to_string()));

    assert!(client.plan().has_liked(62373).await.unwrap());
}

#[tokio::test]
async fn generate_sends_include_route_as_a_string() {
    let transport = MockTransport::scripted(vec![json_response(201, &plan_62373())]);
    let client = FlightPlanDb::with_transport(transport.clone(), Some("key".to_string()));

    let query = flightplandb_core::GenerateQuery::new("EHAM", "KJFK");
    client.plan().generate(&query, true).await.unwrap();

    let requests = transport.recorded();
    assert_eq!(requests[0].path, "/auto/generate");
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["includeRoute"], json!("true"));
    assert_eq!(body["fromICAO"], json!("EHAM"));
}

// ============================================================================
// Status mapping
// ============================================================================

#[tokio::test]
async fn http_statuses_map_to_typed_errors() {
    let transport = MockTransport::scripted(vec![
        json_response(401, &json!({"message": "Unauthorized"})),
        json_response(429, &json!({"message": "Too Many Requests"})),
        json_response(418, &json!({"message": "I'm a teapot"})),
    ]);
    let client = FlightPlanDb::with_transport(transport, None);

    assert!(matches!(
        client.user().me().await.unwrap_err(),
        Error::Unauthorized
    ));
    assert!(matches!(
        client.user().me().await.unwrap_err(),
        Error::TooManyRequests
    ));
    assert!(matches!(
        client.user().me().await.unwrap_err(),
        Error::UnrecognizedStatus(418)
    ));
}

// ============================================================================
// Pagination
// ============================================================================

fn page_of(start: i64, len: i64) -> Value {
    Value::Array(
        (start..start + len)
            .map(|id| json!({"id": id, "fromICAO": "EHAM", "toICAO": "KJFK"}))
            .collect(),
    )
}

#[tokio::test]
async fn search_stops_mid_page_at_the_limit() {
    // Three pages of 40/40/20; a limit of 60 must stop inside page 1 and
    // never request page 2.
    let transport = MockTransport::scripted(vec![
        response_with(200, &[("X-Page-Count", "3")], &page_of(0, 40)),
        json_response(200, &page_of(0, 40)),
        json_response(200, &page_of(40, 40)),
    ]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let query = PlanQuery::default();
    let plans: Vec<_> = client
        .plan()
        .search(&query, SortOrder::Created, false, 60)
        .collect()
        .await;

    assert_eq!(plans.len(), 60);
    let ids: Vec<i64> = plans
        .into_iter()
        .map(|plan| plan.unwrap().id.unwrap())
        .collect();
    assert_eq!(ids, (0..60).collect::<Vec<i64>>());

    let requests = transport.recorded();
    assert_eq!(requests.len(), 3);
    let page_param = |request: &ApiRequest| {
        request
            .query
            .iter()
            .find(|(name, _)| name == "page")
            .map(|(_, value)| value.clone())
    };
    assert_eq!(page_param(&requests[0]), None);
    assert_eq!(page_param(&requests[1]), Some("0".to_string()));
    assert_eq!(page_param(&requests[2]), Some("1".to_string()));
    assert!(requests[0]
        .query
        .iter()
        .any(|(name, value)| name == "sort" && value == "created"));
    assert!(requests[0]
        .query
        .iter()
        .any(|(name, value)| name == "includeRoute" && value == "false"));
}

#[tokio::test]
async fn missing_page_count_means_a_single_page() {
    let transport = MockTransport::scripted(vec![
        json_response(200, &page_of(0, 3)),
        json_response(200, &page_of(0, 3)),
    ]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let query = PlanQuery::default();
    let plans: Vec<_> = client
        .plan()
        .search(&query, SortOrder::Created, false, 100)
        .collect()
        .await;

    assert_eq!(plans.len(), 3);
    // Discovery plus exactly one page.
    assert_eq!(transport.recorded().len(), 2);
}

#[tokio::test]
async fn dropping_the_stream_fetches_no_further_pages() {
    let transport = MockTransport::scripted(vec![
        response_with(200, &[("X-Page-Count", "5")], &page_of(0, 2)),
        json_response(200, &page_of(0, 2)),
    ]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let query = PlanQuery::default();
    let stream = client.plan().search(&query, SortOrder::Created, false, 1000);
    let first: Vec<_> = stream.take(2).collect().await;

    assert_eq!(first.len(), 2);
    assert_eq!(transport.recorded().len(), 2);
}

#[tokio::test]
async fn nav_search_yields_typed_navaids_in_order() {
    let records = json!([
        {
            "ident": "SPY",
            "type": "VOR",
            "lat": 52.54,
            "lon": 4.85,
            "elevation": -11.0,
            "name": "SPIJKERBOOR VOR/DME"
        },
        {
            "ident": "SPY",
            "type": "NDB",
            "lat": 52.53,
            "lon": 4.84,
            "elevation": -10.0,
            "name": "SPIJKERBOOR NDB"
        }
    ]);
    let transport = MockTransport::scripted(vec![
        response_with(200, &[("X-Page-Count", "1")], &records),
        json_response(200, &records),
    ]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let navaids: Vec<_> = client.nav().search("SPY", None, 100).collect().await;
    assert_eq!(navaids.len(), 2);
    assert_eq!(navaids[0].as_ref().unwrap().ident, "SPY");
    assert_eq!(
        navaids[0].as_ref().unwrap().kind,
        flightplandb_core::NodeKind::Vor
    );
    assert_eq!(
        navaids[1].as_ref().unwrap().kind,
        flightplandb_core::NodeKind::Ndb
    );

    let requests = transport.recorded();
    assert_eq!(requests[0].path, "/search/nav");
    assert!(requests[0]
        .query
        .iter()
        .any(|(name, value)| name == "q" && value == "SPY"));
}

// ============================================================================
// Header cache and API info
// ============================================================================

#[tokio::test]
async fn header_cache_is_replaced_wholesale_per_response() {
    let transport = MockTransport::scripted(vec![
        response_with(
            200,
            &[
                ("X-API-Version", "1"),
                ("X-Units", "AVIATION"),
                ("X-Limit-Cap", "2000"),
                ("X-Limit-Used", "10"),
            ],
            &json!({"message": "OK", "errors": null}),
        ),
        response_with(
            200,
            &[("X-Limit-Used", "11")],
            &json!({"message": "OK", "errors": null}),
        ),
    ]);
    let client = FlightPlanDb::with_transport(transport, None);

    client.api().ping().await.unwrap();
    let first = client.cached_headers().unwrap();
    assert_eq!(first.version, Some(1));
    assert_eq!(first.units, Some(Units::Aviation));
    assert_eq!(first.limit_used, Some(10));

    client.api().ping().await.unwrap();
    let second = client.cached_headers().unwrap();
    // Headers absent from the second response are gone, not carried over.
    assert_eq!(second.version, None);
    assert_eq!(second.limit_used, Some(11));
}

#[tokio::test]
async fn info_accessors_warm_the_cache_with_one_ping() {
    let transport = MockTransport::scripted(vec![response_with(
        200,
        &[
            ("X-API-Version", "1"),
            ("X-Units", "METRIC"),
            ("X-Limit-Cap", "100"),
            ("X-Limit-Used", "2"),
        ],
        &json!({"message": "OK", "errors": null}),
    )]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    assert!(client.cached_headers().is_none());
    assert_eq!(client.api().units().await.unwrap(), Units::Metric);
    // A warm cache answers without another request.
    assert_eq!(client.api().version().await.unwrap(), 1);
    assert_eq!(client.api().limit_cap().await.unwrap(), 100);
    assert_eq!(client.api().limit_used().await.unwrap(), 2);

    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "");
}

#[tokio::test]
async fn revoke_without_a_key_never_reaches_the_wire() {
    let transport = MockTransport::scripted(vec![]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let err = client.api().revoke().await.unwrap_err();
    assert!(matches!(err, Error::MissingApiKey));
    assert!(transport.recorded().is_empty());
}

// ============================================================================
// Users, tags and weather
// ============================================================================

#[tokio::test]
async fn user_search_yields_reduced_profiles() {
    let records = json!([
        {"id": 1, "username": "lemon", "location": null, "gravatarHash": "abc"},
        {"id": 2, "username": "lemondrop", "location": "NL", "gravatarHash": "def"}
    ]);
    let transport = MockTransport::scripted(vec![
        response_with(200, &[("X-Page-Count", "1")], &records),
        json_response(200, &records),
    ]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let users: Vec<_> = client.user().search("lemon", 100).collect().await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].as_ref().unwrap().username, "lemon");
    assert_eq!(users[1].as_ref().unwrap().username, "lemondrop");
    assert_eq!(transport.recorded()[0].path, "/search/users");
}

#[tokio::test]
async fn weather_fetch_maps_the_uppercase_fields() {
    let transport = MockTransport::scripted(vec![json_response(
        200,
        &json!({
            "METAR": "EHAM 271525Z 29012KT 9999 FEW035 10/04 Q1021 NOSIG",
            "TAF": "TAF EHAM 271430Z 2715/2821 30011KT 9999 FEW035"
        }),
    )]);
    let client = FlightPlanDb::with_transport(transport.clone(), None);

    let weather = client.weather().fetch("EHAM").await.unwrap();
    assert!(weather.metar.unwrap().starts_with("EHAM"));
    assert!(weather.taf.unwrap().starts_with("TAF EHAM"));
    assert_eq!(transport.recorded()[0].path, "/weather/EHAM");
}

#[tokio::test]
async fn tags_fetch_decodes_the_listing() {
    let transport = MockTransport::scripted(vec![json_response(
        200,
        &json!([
            {"name": "Decoded", "description": "Plans decoded from route strings",
             "planCount": 7743, "popularity": 217},
            {"name": "Generated", "description": null,
             "planCount": 1057, "popularity": 65}
        ]),
    )]);
    let client = FlightPlanDb::with_transport(transport, None);

    let tags = client.tags().fetch().await.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "Decoded");
    assert_eq!(tags[1].plan_count, 1057);
}

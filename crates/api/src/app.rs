use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        items::{create_item, delete_item, get_item, list_items, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::IF_MATCH])
        .expose_headers([header::ETAG]);

    Router::new()
        .route("/todo", get(list_items).post(create_item))
        .route(
            "/todo/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{HeaderMap, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use todo_core::item::{Item, ItemList};
    use tower::ServiceExt;

    struct TestResponse {
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    }

    impl TestResponse {
        fn json<T: serde::de::DeserializeOwned>(&self) -> T {
            serde_json::from_slice(&self.body).unwrap()
        }

        fn etag(&self) -> String {
            self.headers
                .get(header::ETAG)
                .unwrap()
                .to_str()
                .unwrap()
                .to_string()
        }
    }

    async fn send(state: &AppState, request: Request<Body>) -> TestResponse {
        let response = create_app(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn create(state: &AppState, text: &str) -> (Item, String) {
        let body = serde_json::json!({ "text": text }).to_string();
        let response = send(state, json_request(Method::POST, "/todo", &body)).await;
        assert_eq!(response.status, StatusCode::CREATED);
        (response.json(), response.etag())
    }

    async fn list(state: &AppState) -> Vec<Item> {
        let response = send(state, get_request("/todo")).await;
        assert_eq!(response.status, StatusCode::OK);
        response.json::<ItemList>().items
    }

    // ==================== Health ====================

    #[tokio::test]
    async fn test_livez() {
        let state = AppState::default();
        let response = send(&state, get_request("/livez")).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    // ==================== Create ====================

    #[tokio::test]
    async fn test_create_item() {
        let state = AppState::default();
        let (item, etag) = create(&state, "buy milk").await;

        assert_eq!(item.text, "buy milk");
        assert!(!item.completed);
        assert_eq!(item.id.len(), 32);
        assert!(!etag.is_empty());

        let items = list(&state).await;
        assert_eq!(items, vec![item]);
    }

    #[tokio::test]
    async fn test_create_generates_distinct_ids() {
        let state = AppState::default();
        let (first, _) = create(&state, "same").await;
        let (second, _) = create(&state, "same").await;

        assert_ne!(first.id, second.id);
        assert_eq!(list(&state).await.len(), 2);
    }

    #[tokio::test]
    async fn test_create_ignores_client_fields() {
        let state = AppState::default();
        let body = r#"{"id":"mine","text":"x","completed":true}"#;
        let response = send(&state, json_request(Method::POST, "/todo", body)).await;

        assert_eq!(response.status, StatusCode::CREATED);
        let item: Item = response.json();
        assert_ne!(item.id, "mine");
        assert!(!item.completed);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_bodies() {
        let state = AppState::default();

        for body in ["{}", r#"{"text":""}"#, r#"{"text":"   "}"#, "not json", "[]"] {
            let response = send(&state, json_request(Method::POST, "/todo", body)).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        }

        assert!(list(&state).await.is_empty());
    }

    // ==================== Get ====================

    #[tokio::test]
    async fn test_get_item() {
        let state = AppState::default();
        let (item, etag) = create(&state, "read me").await;

        let response = send(&state, get_request(&format!("/todo/{}", item.id))).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json::<Item>(), item);
        assert_eq!(response.etag(), etag);
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let state = AppState::default();
        let response = send(&state, get_request("/todo/nope")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    // ==================== Update ====================

    #[tokio::test]
    async fn test_update_without_if_match() {
        let state = AppState::default();
        let (item, etag) = create(&state, "buy milk").await;

        let body = serde_json::json!({ "id": item.id, "text": "buy milk", "completed": true });
        let response = send(
            &state,
            json_request(Method::PUT, &format!("/todo/{}", item.id), &body.to_string()),
        )
        .await;

        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_ne!(response.etag(), etag);
        assert!(list(&state).await[0].completed);
    }

    #[tokio::test]
    async fn test_update_id_mismatch() {
        let state = AppState::default();
        let (item, _) = create(&state, "original").await;

        let body = r#"{"id":"other","text":"changed","completed":true}"#;
        let response = send(
            &state,
            json_request(Method::PUT, &format!("/todo/{}", item.id), body),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(list(&state).await, vec![item]);
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let state = AppState::default();
        let body = r#"{"id":"ghost","text":"boo","completed":false}"#;
        let response = send(&state, json_request(Method::PUT, "/todo/ghost", body)).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(list(&state).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_with_matching_if_match() {
        let state = AppState::default();
        let (item, etag) = create(&state, "draft").await;

        let request = Request::builder()
            .method(Method::PUT)
            .uri(format!("/todo/{}", item.id))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::IF_MATCH, &etag)
            .body(Body::from(format!(
                r#"{{"id":"{}","text":"final","completed":false}}"#,
                item.id
            )))
            .unwrap();
        let response = send(&state, request).await;

        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_ne!(response.etag(), etag);
        assert_eq!(list(&state).await[0].text, "final");
    }

    #[tokio::test]
    async fn test_update_with_stale_if_match() {
        let state = AppState::default();
        let (item, stale) = create(&state, "v1").await;

        // Someone else writes first.
        let body = format!(r#"{{"id":"{}","text":"v2"}}"#, item.id);
        let response = send(
            &state,
            json_request(Method::PUT, &format!("/todo/{}", item.id), &body),
        )
        .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let request = Request::builder()
            .method(Method::PUT)
            .uri(format!("/todo/{}", item.id))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::IF_MATCH, &stale)
            .body(Body::from(format!(
                r#"{{"id":"{}","text":"v3","completed":true}}"#,
                item.id
            )))
            .unwrap();
        let response = send(&state, request).await;

        assert_eq!(response.status, StatusCode::PRECONDITION_FAILED);
        let items = list(&state).await;
        assert_eq!(items[0].text, "v2");
        assert!(!items[0].completed);
    }

    // ==================== Delete ====================

    #[tokio::test]
    async fn test_delete_twice() {
        let state = AppState::default();
        let (item, _) = create(&state, "temp").await;
        let uri = format!("/todo/{}", item.id);

        let response = send(&state, delete_request(&uri)).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let response = send(&state, delete_request(&uri)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_missing_item() {
        let state = AppState::default();
        let response = send(&state, delete_request("/todo/nothing")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    // ==================== List ====================

    #[tokio::test]
    async fn test_list_empty() {
        let state = AppState::default();
        let response = send(&state, get_request("/todo")).await;

        assert_eq!(response.status, StatusCode::OK);
        let value: serde_json::Value = response.json();
        assert_eq!(value, serde_json::json!({ "items": [] }));
    }

    #[tokio::test]
    async fn test_list_reflects_creates_and_deletes() {
        let state = AppState::default();
        let (a, _) = create(&state, "a").await;
        let (b, _) = create(&state, "b").await;
        let (c, _) = create(&state, "c").await;

        send(&state, delete_request(&format!("/todo/{}", b.id))).await;

        let mut ids: Vec<String> = list(&state).await.into_iter().map(|i| i.id).collect();
        ids.sort();
        let mut expected = vec![a.id, c.id];
        expected.sort();
        assert_eq!(ids, expected);
    }

    // ==================== Scenario ====================

    #[tokio::test]
    async fn test_buy_milk_lifecycle() {
        let state = AppState::default();
        let (item, _) = create(&state, "buy milk").await;
        assert_eq!(list(&state).await, vec![item.clone()]);

        let body = serde_json::json!({ "id": item.id, "text": "buy milk", "completed": true });
        let response = send(
            &state,
            json_request(Method::PUT, &format!("/todo/{}", item.id), &body.to_string()),
        )
        .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(
            list(&state).await,
            vec![item.clone().with_completed(true)]
        );

        let response = send(&state, delete_request(&format!("/todo/{}", item.id))).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(list(&state).await.is_empty());
    }
}

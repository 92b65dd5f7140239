use std::net::SocketAddr;

use catalog_api::ApiConfig;
use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(seed: bool) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let config = ApiConfig {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            seed,
            ..ApiConfig::default()
        };
        let app = catalog_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind(config.addr)
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn names(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

async fn list(client: &reqwest::Client, srv: &TestServer, query: &str) -> Value {
    let res = client
        .get(srv.url(&format!("/products{query}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn(true).await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_returns_seeded_catalog_in_insertion_order() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let body = list(&client, &srv, "").await;
    assert_eq!(names(&body), vec!["Computer", "Printer", "Tablet", "Monitor"]);
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["price"].as_f64(), Some(40000.0));
}

#[tokio::test]
async fn list_filters_and_sorts() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let body = list(&client, &srv, "?name=print").await;
    assert_eq!(names(&body), vec!["Printer"]);

    let body = list(&client, &srv, "?sort=price_desc").await;
    assert_eq!(names(&body), vec!["Computer", "Tablet", "Monitor", "Printer"]);

    let body = list(&client, &srv, "?sort=bogus").await;
    assert_eq!(names(&body), vec!["Computer", "Printer", "Tablet", "Monitor"]);

    let body = list(&client, &srv, "?name=O&sort=name_desc").await;
    assert_eq!(names(&body), vec!["Monitor", "Computer"]);
}

#[tokio::test]
async fn list_keeps_first_value_of_repeated_parameters() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let body = list(&client, &srv, "?name=print&name=tab").await;
    assert_eq!(names(&body), vec!["Printer"]);

    let body = list(&client, &srv, "?sort=price&sort=id").await;
    assert_eq!(names(&body), vec!["Printer", "Monitor", "Tablet", "Computer"]);

    let body = list(&client, &srv, "?name=a&name=b&extra=1").await;
    assert_eq!(names(&body), vec!["Tablet"]);
}

#[tokio::test]
async fn get_unknown_or_malformed_id_is_not_found() {
    let srv = TestServer::spawn(true).await;

    let res = reqwest::get(srv.url("/products/99")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "errorMessage": "Product not found by given Id" }));

    let res = reqwest::get(srv.url("/products/abc")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_lifecycle_create_get_update_delete() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    // Create
    let res = client
        .post(srv.url("/products"))
        .json(&json!({ "name": "Scanner", "price": 3500.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()["location"], "/products/5");
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 5);
    assert_eq!(created["name"], "Scanner");
    assert_eq!(created["price"].as_f64(), Some(3500.5));

    // Get
    let res = client.get(srv.url("/products/5")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);

    // Full update echoes the payload
    let res = client
        .put(srv.url("/products/5"))
        .json(&json!({ "id": 5, "name": "Photo Scanner", "price": 4000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let echoed: Value = res.json().await.unwrap();
    assert_eq!(echoed["id"], 5);
    assert_eq!(echoed["name"], "Photo Scanner");
    assert_eq!(echoed["price"].as_f64(), Some(4000.0));

    // Name-only update keeps the price
    let res = client
        .patch(srv.url("/products/updateName/5"))
        .json(&json!({ "id": 5, "name": "Flatbed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let echoed: Value = res.json().await.unwrap();
    assert_eq!(echoed, json!({ "id": 5, "name": "Flatbed" }));

    let fetched: Value = client
        .get(srv.url("/products/5"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Flatbed");
    assert_eq!(fetched["price"].as_f64(), Some(4000.0));

    // Delete
    let res = client.delete(srv.url("/products/5")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let res = client.get(srv.url("/products/5")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(srv.url("/products/5")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_duplicate_name_ignoring_case() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/products"))
        .json(&json!({ "name": "computer", "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "errorMessage": "Name must be unique" }));

    assert_eq!(list(&client, &srv, "").await.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn create_rejects_invalid_fields() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    for (payload, message) in [
        (json!({ "name": "   ", "price": 1 }), "The field Name is cannot be null or empty"),
        (json!({ "price": 1 }), "The field Name is cannot be null or empty"),
        (json!({ "name": "Lamp", "price": -5 }), "The field Price must be between 0 and 1000000000000."),
        (json!({ "name": "Lamp" }), "The Price field is required."),
    ] {
        let res = client.post(srv.url("/products")).json(&payload).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload {payload}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["errorMessage"], message);
    }

    // Not JSON at all.
    let res = client
        .post(srv.url("/products"))
        .header("content-type", "application/json")
        .body("{ nope")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["errorMessage"].is_string());
}

#[tokio::test]
async fn update_checks_ids_then_existence_then_uniqueness() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    // Mismatch wins even when the route id does not exist.
    for route in ["/products/1", "/products/77"] {
        let res = client
            .put(srv.url(route))
            .json(&json!({ "id": 2, "name": "Anything", "price": 1 }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["errorMessage"], "Id was not match");
    }

    let res = client
        .put(srv.url("/products/77"))
        .json(&json!({ "id": 77, "name": "Anything", "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Product Not Found");

    let res = client
        .patch(srv.url("/products/updateName/3"))
        .json(&json!({ "id": 3, "name": "MONITOR" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Name must be unique");

    // Nothing changed.
    let body = list(&client, &srv, "").await;
    assert_eq!(names(&body), vec!["Computer", "Printer", "Tablet", "Monitor"]);
}

#[tokio::test]
async fn unseeded_store_starts_empty_and_assigns_from_one() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    assert_eq!(list(&client, &srv, "").await, json!([]));

    for (i, name) in ["Alpha", "Beta", "Gamma"].iter().enumerate() {
        let res = client
            .post(srv.url("/products"))
            .json(&json!({ "name": name, "price": 10 }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = res.json().await.unwrap();
        assert_eq!(created["id"], i as i64 + 1);
    }
}

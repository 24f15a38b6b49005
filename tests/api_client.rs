use serde_json::json;
use std::time::Duration;
use stockroom::api::{ApiError, HttpBackend, InventoryBackend, LoginArgs, ProductInput};
use stockroom::paging::{ListQuery, SortDirection};
use stockroom::session::Session;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer) -> HttpBackend {
    HttpBackend::new(&format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap()
}

fn session() -> Session {
    Session::new("abc123", None)
}

fn product_json(id: i64) -> serde_json::Value {
    json!({"id": id, "name": format!("Item {}", id), "sku": format!("SKU-{}", id), "quantity": 3, "price": 1500})
}

#[tokio::test]
async fn test_login_posts_credentials_and_reads_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "admin@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": {"id": 1, "name": "Admin", "email": "admin@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = backend(&server)
        .login(&LoginArgs {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "tok-1");
    assert_eq!(response.user.unwrap().name, "Admin");
}

#[tokio::test]
async fn test_bad_credentials_are_rejected_not_expired() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let error = backend(&server)
        .login(&LoginArgs {
            email: "admin@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(error, ApiError::Rejected("Invalid credentials".to_string()));
}

#[tokio::test]
async fn test_product_list_sends_bearer_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(header("authorization", "Bearer abc123"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "25"))
        .and(query_param("search", "item"))
        .and(query_param("sort_by", "price"))
        .and(query_param("sort_order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [product_json(26), product_json(27)],
            "current_page": 2,
            "last_page": 3,
            "total": 52
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = ListQuery::with_per_page(25);
    query.page = 2;
    query.search = "  item ".to_string();
    query.sort.toggle("price");
    assert_eq!(query.sort.toggle("price"), SortDirection::Descending);

    let page = backend(&server).fetch_products(&session(), &query).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 52);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 2);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})))
        .mount(&server)
        .await;

    let error = backend(&server)
        .fetch_products(&session(), &ListQuery::default())
        .await
        .unwrap_err();
    assert!(error.is_unauthorized());
}

#[tokio::test]
async fn test_single_product_accepts_wrapper_and_string_numbers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 7, "name": "Stapler", "sku": "STP", "quantity": "12", "price": "25000.00"}
        })))
        .mount(&server)
        .await;

    let product = backend(&server).get_product(&session(), 7).await.unwrap();
    assert_eq!(product.name, "Stapler");
    assert_eq!(product.quantity, 12);
    assert_eq!(product.price, 25000.0);
}

#[tokio::test]
async fn test_duplicate_sku_surfaces_field_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {
                "name": ["The name field is too long."],
                "sku": ["The sku has already been taken."]
            }
        })))
        .mount(&server)
        .await;

    let input = ProductInput {
        name: "Pen".to_string(),
        sku: "PEN-1".to_string(),
        quantity: 1,
        price: 500.0,
    };
    let error = backend(&server).create_product(&session(), &input).await.unwrap_err();
    assert!(matches!(error, ApiError::Validation { .. }));
    assert_eq!(error.user_message(), "The sku has already been taken.");
}

#[tokio::test]
async fn test_update_and_delete_hit_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/products/3"))
        .and(body_json(json!({"name": "Pen", "sku": "PEN-1", "quantity": 4, "price": 750.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(3)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend(&server);
    let input = ProductInput {
        name: "Pen".to_string(),
        sku: "PEN-1".to_string(),
        quantity: 4,
        price: 750.0,
    };
    let updated = backend.update_product(&session(), 3, &input).await.unwrap();
    assert_eq!(updated.id, 3);
    backend.delete_product(&session(), 3).await.unwrap();
}

#[tokio::test]
async fn test_server_failure_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let error = backend(&server).delete_product(&session(), 3).await.unwrap_err();
    assert_eq!(
        error,
        ApiError::Server {
            status: 500,
            message: "boom".to_string()
        }
    );
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let backend = HttpBackend::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();
    let error = backend
        .fetch_products(&session(), &ListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
}

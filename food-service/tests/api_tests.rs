mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

fn customer() -> Value {
    json!({
        "username": "nicola",
        "email": "nicola@example.com",
        "usertype": "customer",
        "password": "pass_word!"
    })
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_register_customer_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&customer())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "nicola");
    assert_eq!(body["email"], "nicola@example.com");
    assert_eq!(body["usertype"], "customer");
    assert_eq!(body["approval"], "approved");
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind("nicola@example.com")
        .fetch_one(&app.db.pool)
        .await
        .unwrap();
    assert_ne!(stored, "pass_word!");
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&customer())
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/register")
        .json(&json!({
            "username": "someone-else",
            "email": "nicola@example.com",
            "usertype": "customer",
            "password": "another_one"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User already exists");
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_register_restaurant_creates_pending_owner_and_restaurant() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "Paradise",
            "email": "owner@paradise.example",
            "usertype": "restaurant",
            "password": "biryani",
            "restaurantAddress": "Hyderabad, India"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["approval"], "pending");

    let restaurants: Value = app
        .get("/fetch-restaurants")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let restaurants = restaurants.as_array().unwrap();
    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0]["ownerId"], body["id"]);
    assert_eq!(restaurants[0]["title"], "Paradise");
    assert_eq!(restaurants[0]["address"], "Hyderabad, India");
    assert_eq!(restaurants[0]["menu"], json!([]));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_register_missing_field_is_unprocessable() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "usertype": "customer"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("missing field `password`"));
    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&customer())
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/login")
        .json(&json!({ "email": "nicola@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "nicola@example.com");
    assert_eq!(body["usertype"], "customer");
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&customer())
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/login")
        .json(&json!({ "email": "nicola@example.com", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_email = app
        .post("/login")
        .json(&json!({ "email": "ghost@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let first = wrong_password.text().await.unwrap();
    let second = unknown_email.text().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::from_str::<Value>(&first).unwrap(),
        json!({ "message": "Invalid email or password" })
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_fetch_users_newest_first() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&customer())
        .send()
        .await
        .expect("Failed to execute request");
    app.post("/register")
        .json(&json!({
            "username": "second",
            "email": "second@example.com",
            "usertype": "admin",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get("/fetch-users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "second@example.com");
    assert_eq!(users[1]["email"], "nicola@example.com");
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_fetch_items_empty() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/fetch-items")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!([]));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_admin_settings_created_once() {
    let app = TestApp::spawn().await;

    let categories = app
        .get("/fetch-categories")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(categories.status(), StatusCode::OK);
    let body: Value = categories.json().await.unwrap();
    assert_eq!(body, json!([]));

    let (first, second) = tokio::join!(
        app.get("/fetch-promoted-list").send(),
        app.get("/fetch-categories").send(),
    );
    assert_eq!(first.unwrap().status(), StatusCode::OK);
    assert_eq!(second.unwrap().status(), StatusCode::OK);

    let promoted: Value = app
        .get("/fetch-promoted-list")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(promoted, json!([]));

    assert_eq!(app.count("admin_settings").await, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_restaurant_registration_adds_no_restaurant() {
    let app = TestApp::spawn().await;

    let owner = json!({
        "username": "Minerva",
        "email": "owner@minerva.example",
        "usertype": "restaurant",
        "password": "filter_coffee"
    });

    let first = app.post("/register").json(&owner).send().await.unwrap();
    let second = app.post("/register").json(&owner).send().await.unwrap();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.count("users").await, 1);
    assert_eq!(app.count("restaurants").await, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_restaurant_insert_failure_rolls_back_owner() {
    let app = TestApp::spawn().await;

    // Every restaurant insert now fails, after the account row is written.
    sqlx::query("ALTER TABLE restaurants ADD CONSTRAINT reject_all CHECK (false) NOT VALID")
        .execute(&app.db.pool)
        .await
        .unwrap();

    let response = app
        .post("/register")
        .json(&json!({
            "username": "Paradise",
            "email": "owner@paradise.example",
            "usertype": "restaurant",
            "password": "biryani"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Server Error" }));

    assert_eq!(app.count("users").await, 0);
    assert_eq!(app.count("restaurants").await, 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_fetch_items_undecodable_row_is_server_error() {
    let app = TestApp::spawn().await;

    sqlx::query(
        "ALTER TABLE food_items ALTER COLUMN price DROP DEFAULT, \
         ALTER COLUMN price TYPE TEXT USING price::text",
    )
    .execute(&app.db.pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO food_items (id, title, restaurant_id, price) VALUES ($1, $2, $3, $4)")
        .bind(uuid::Uuid::new_v4())
        .bind("Chicken Biryani")
        .bind(uuid::Uuid::new_v4())
        .bind("twelve")
        .execute(&app.db.pool)
        .await
        .unwrap();

    let response = app
        .get("/fetch-items")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Server Error" }));
}

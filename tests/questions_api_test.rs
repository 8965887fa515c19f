use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use newmeclass_backend::middleware::auth::Claims;

const TEST_SECRET: &str = "test_secret_key";

fn admin_token() -> String {
    let claims = Claims {
        sub: "admin".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        role: Some("admin".to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("encode token")
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn questions_flow_end_to_end() {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping questions_flow_end_to_end");
        return;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", TEST_SECRET);

    newmeclass_backend::config::init_config().expect("init config");
    let pool = newmeclass_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let app_state = newmeclass_backend::AppState::new(pool.clone());
    let app = newmeclass_backend::routes::router().with_state(app_state);
    let token = admin_token();

    // An empty catalog still reports the default category set.
    sqlx::query("DELETE FROM questions")
        .execute(&pool)
        .await
        .expect("wipe questions");
    let req = Request::builder()
        .method("GET")
        .uri("/api/questions/categories/list")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fallback = body_json(resp).await;
    assert_eq!(
        fallback,
        json!(["personality", "talent", "skills", "interest"])
    );

    // Destructive reseed gives a known catalog.
    let req = Request::builder()
        .method("POST")
        .uri("/api/questions/seed-questions")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["free_count"], 5);
    assert_eq!(body["paid_count"], 25);
    assert_eq!(body["total"], 30);

    // Free tier filter returns exactly the 5 free questions.
    let req = Request::builder()
        .method("GET")
        .uri("/api/questions?testType=free&limit=10")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let free = body_json(resp).await;
    let free = free.as_array().unwrap();
    assert_eq!(free.len(), 5);
    for q in free {
        assert_eq!(q["isFree"], true);
        assert_eq!(q["testType"], "free");
        assert!(q["text"].is_string());
        assert!(q["options"].as_array().unwrap().len() >= 2);
    }

    let req = Request::builder()
        .method("GET")
        .uri("/api/questions?testType=paid")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let paid = body_json(resp).await;
    assert_eq!(paid.as_array().unwrap().len(), 25);

    // Full catalog is sorted by order ascending, 1..=30 with no gaps.
    let req = Request::builder()
        .method("GET")
        .uri("/api/questions")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let all = body_json(resp).await;
    let orders: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, (1..=30).collect::<Vec<i64>>());

    // Rows that predate the is_active flag carry NULL and count as active:
    // visible under isActive=true, absent under isActive=false.
    let legacy_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO questions (text, question, category, options, sort_order, is_free, is_active)
        VALUES ($1, $1, 'personality', '[]'::jsonb, 90, FALSE, NULL)
        RETURNING id
        "#,
    )
    .bind("Pertanyaan lama tanpa penanda aktif?")
    .fetch_one(&pool)
    .await
    .expect("insert legacy question");

    let req = Request::builder()
        .method("GET")
        .uri("/api/questions?isActive=true")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let active = body_json(resp).await;
    let active_ids: Vec<&str> = active
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();
    assert!(active_ids.contains(&legacy_id.to_string().as_str()));

    let req = Request::builder()
        .method("GET")
        .uri("/api/questions?isActive=false")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let inactive = body_json(resp).await;
    for q in inactive.as_array().unwrap() {
        assert_ne!(q["id"].as_str().unwrap(), legacy_id.to_string());
    }

    sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(legacy_id)
        .execute(&pool)
        .await
        .expect("remove legacy question");

    // Category filter composes with the tier filter.
    let req = Request::builder()
        .method("GET")
        .uri("/api/questions?category=personality&testType=free")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let personality = body_json(resp).await;
    for q in personality.as_array().unwrap() {
        assert_eq!(q["category"], "personality");
        assert_eq!(q["isFree"], true);
    }

    let req = Request::builder()
        .method("GET")
        .uri("/api/questions/categories/list")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let categories = body_json(resp).await;
    let categories: Vec<&str> = categories
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    for expected in ["personality", "talent", "skills", "interest"] {
        assert!(categories.contains(&expected), "missing {expected}");
    }

    // Malformed and unknown ids.
    let req = Request::builder()
        .method("GET")
        .uri("/api/questions/not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["detail"], "Invalid question ID");

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/questions/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Mutations require a bearer token.
    let create_body = json!({
        "text": "Pertanyaan uji coba?",
        "category": "skills",
        "options": [
            {"text": "Ya", "value": "A", "score": 1},
            {"text": "Tidak", "value": "B", "score": 2}
        ],
        "order": 31,
        "isFree": false
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/questions")
        .header("content-type", "application/json")
        .body(Body::from(create_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .method("POST")
        .uri("/api/questions")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(create_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await;
    assert_eq!(created["success"], true);
    let question_id = created["questionId"].as_str().unwrap().to_string();

    // Server stamps isActive on create.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/questions/{question_id}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let fetched = body_json(resp).await;
    assert_eq!(fetched["isActive"], true);
    assert_eq!(fetched["testType"], "paid");

    // Sparse patch changes only the supplied field.
    let req = Request::builder()
        .method("PUT")
        .uri(format!("/api/questions/{question_id}"))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(json!({"order": 42}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/questions/{question_id}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let patched = body_json(resp).await;
    assert_eq!(patched["order"], 42);
    assert_eq!(patched["text"], "Pertanyaan uji coba?");
    assert_eq!(patched["category"], "skills");
    assert_eq!(patched["isFree"], false);

    // Explicit null is rejected, not treated as absent.
    let req = Request::builder()
        .method("PUT")
        .uri(format!("/api/questions/{question_id}"))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(json!({"category": null}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Reorder applies valid entries and skips garbage ids silently.
    let reorder_body = json!([
        {"id": question_id, "order": 99},
        {"id": "garbage", "order": 1},
        {"questionId": Uuid::new_v4().to_string(), "order": 2}
    ]);
    let req = Request::builder()
        .method("PUT")
        .uri("/api/questions/reorder")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(reorder_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("GET")
        .uri("/api/questions")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let all = body_json(resp).await;
    let last = all.as_array().unwrap().last().unwrap();
    assert_eq!(last["id"].as_str().unwrap(), question_id);
    assert_eq!(last["order"], 99);

    // Delete is NotFound-idempotent: second delete reports 404.
    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/questions/{question_id}"))
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/questions/{question_id}"))
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

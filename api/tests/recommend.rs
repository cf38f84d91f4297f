use std::{fs, path::Path, sync::Arc};

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use nutriplan_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;

const MEALS: [(&str, &str); 3] = [
    ("breakfast", "BREAKFAST"),
    ("lunch", "LUNCH"),
    ("dinner", "DINNER"),
];

fn server_for(dataset_dir: &Path, extra: &[&str]) -> TestServer {
    let mut argv = vec![
        "nutriplan-api".to_string(),
        "--dataset-dir".to_string(),
        dataset_dir.display().to_string(),
        "--disable-metrics".to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));

    let args = Arc::new(Args::parse_from(argv));
    let app = router(state(args)).unwrap();
    TestServer::new(app).unwrap()
}

fn dataset(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn uniform_csv(rows: usize, calories: u32, carbohydrates: u32) -> String {
    let mut csv = String::from("food,Calories,Protein,Carbohydrates,Fat\n");
    for i in 0..rows {
        csv.push_str(&format!("food-{i},{calories},3.333,{carbohydrates},1.005\n"));
    }
    csv
}

fn profile(condition: &str) -> Value {
    json!({
        "full_name": "John Doe",
        "weight_kg": 70,
        "height_cm": 170,
        "gender": "male",
        // unparseable on purpose: age falls back to 30 so the target is fixed
        "dob": "unknown",
        "primary_condition": condition
    })
}

#[tokio::test]
async fn recommends_meals_within_the_caps() {
    let dir = dataset(&[("foods.csv", uniform_csv(20, 100, 10).as_str())]);
    let server = server_for(dir.path(), &[]);

    let response = server.post("/recommend").json(&profile("diabetes")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["patient_info"]["full_name"], "John Doe");
    assert_eq!(body["patient_info"]["condition"], "DIABETES");
    // (700 + 1062.5 - 150 + 5) * 1.2
    assert_eq!(body["patient_info"]["daily_calories"], 1941.0);

    for (key, label) in MEALS {
        let meal = body["meals"][key].as_array().unwrap();
        assert_eq!(meal.len(), 5);
        for item in meal {
            assert_eq!(item["meal_type"], label);
            assert!(item["carbohydrates"].as_f64().unwrap() <= 25.0);
            assert_eq!(item["protein"], 3.33);
        }
    }
}

#[tokio::test]
async fn high_carb_dataset_gives_empty_meals_for_diabetes() {
    let dir = dataset(&[("foods.csv", uniform_csv(20, 100, 30).as_str())]);
    let server = server_for(dir.path(), &[]);

    let response = server.post("/recommend").json(&profile("DIABETES")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    for (key, _) in MEALS {
        assert_eq!(body["meals"][key], json!([]));
    }
}

#[tokio::test]
async fn condition_defaults_to_none() {
    let dir = dataset(&[("foods.csv", uniform_csv(2, 100, 30).as_str())]);
    let server = server_for(dir.path(), &[]);
    let mut request = profile("ignored");
    request.as_object_mut().unwrap().remove("primary_condition");

    let response = server.post("/recommend").json(&request).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["patient_info"]["condition"], "NONE");
    assert_eq!(body["meals"]["lunch"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn seeded_server_is_reproducible() {
    let dir = dataset(&[("foods.csv", uniform_csv(50, 100, 10).as_str())]);
    let server = server_for(dir.path(), &["--sampler-seed", "99"]);

    let first: Value = server.post("/recommend").json(&profile("NONE")).await.json();
    let second: Value = server.post("/recommend").json(&profile("NONE")).await.json();

    assert_eq!(first["meals"], second["meals"]);
}

#[tokio::test]
async fn missing_dataset_dir_is_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_for(&dir.path().join("absent"), &[]);

    let response = server.post("/recommend").json(&profile("NONE")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_DATASET_UNAVAILABLE");
    assert_eq!(body["message"], "Dataset folder not found");
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn empty_dataset_dir_is_a_server_error() {
    let dir = dataset(&[("readme.txt", "nothing here")]);
    let server = server_for(dir.path(), &[]);

    let response = server.post("/recommend").json(&profile("NONE")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["message"], "No CSV files found");
}

#[tokio::test]
async fn unusable_schema_is_a_server_error() {
    let dir = dataset(&[("foods.csv", "title,kcal\napple,52\n")]);
    let server = server_for(dir.path(), &[]);

    let response = server.post("/recommend").json(&profile("NONE")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_DATASET_SCHEMA");
}

#[tokio::test]
async fn rejects_invalid_profiles() {
    let dir = dataset(&[("foods.csv", uniform_csv(2, 100, 10).as_str())]);
    let server = server_for(dir.path(), &[]);

    let mut request = profile("NONE");
    request["weight_kg"] = json!(0);
    let response = server.post("/recommend").json(&request).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_VALIDATION");

    let mut request = profile("NONE");
    request.as_object_mut().unwrap().remove("dob");
    let response = server.post("/recommend").json(&request).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn routes_honour_the_root_path() {
    let dir = dataset(&[("foods.csv", uniform_csv(2, 100, 10).as_str())]);
    let server = server_for(dir.path(), &["--root-path", "/api"]);

    server
        .post("/api/recommend")
        .json(&profile("NONE"))
        .await
        .assert_status_ok();

    let health = server.get("/api/health").await;
    health.assert_status_ok();
    health.assert_json(&json!({ "status": "ok" }));
}

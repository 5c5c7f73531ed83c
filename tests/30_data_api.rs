mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn data_routes_require_login() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;
    let client = reqwest::Client::new();

    for path in ["/api/grades", "/api/homework", "/api/timetable?from=2024-01-15&to=2024-01-19"] {
        let res = client.get(server.url(path)).send().await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", path);

        let body = res.json::<Value>().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "NOT_AUTHENTICATED");
    }
    Ok(())
}

#[tokio::test]
async fn grades_after_login() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;
    let client = reqwest::Client::new();
    common::login_demo(&server, &client).await?;

    let body = client.get(server.url("/api/grades")).send().await?.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["grades"]["period"], "Trimestre 2");

    let res = client
        .get(server.url("/api/grades"))
        .query(&[("period", "Trimestre 1")])
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["grades"]["period"], "Trimestre 1");

    // Unknown periods fail inside the client, not in the route
    let res = client
        .get(server.url("/api/grades"))
        .query(&[("period", "Semestre 4")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn homework_after_login() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;
    let client = reqwest::Client::new();
    common::login_demo(&server, &client).await?;

    let body = client.get(server.url("/api/homework")).send().await?.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["homework"].as_array().map(Vec::len), Some(3));

    let body = client
        .get(server.url("/api/homework?from=2024-01-16&to=2024-01-31"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["homework"].as_array().map(Vec::len), Some(2));

    let res = client.get(server.url("/api/homework?to=someday")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn timetable_validation() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/api/timetable?from=2024-01-15")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Paramètres from et to requis");

    let res = client
        .get(server.url("/api/timetable?from=not-a-date&to=2024-01-01"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Dates invalides");
    Ok(())
}

#[tokio::test]
async fn timetable_after_login() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;
    let client = reqwest::Client::new();
    common::login_demo(&server, &client).await?;

    let body = client
        .get(server.url("/api/timetable?from=2024-01-15&to=2024-01-15T23:59"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["success"], true);

    let lessons = body["timetable"].as_array().cloned().unwrap_or_default();
    assert_eq!(lessons.len(), 2);
    assert!(lessons.iter().all(|l| l["from"].as_str().unwrap_or("").starts_with("2024-01-15")));
    Ok(())
}

#[tokio::test]
async fn timetable_upper_bound_includes_time_of_day() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;
    let client = reqwest::Client::new();
    common::login_demo(&server, &client).await?;

    let body = client
        .get(server.url("/api/timetable?from=2024-01-15&to=2024-01-15T08:30"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let lessons = body["timetable"].as_array().cloned().unwrap_or_default();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0]["subject"], "Mathématiques");
    Ok(())
}

#[tokio::test]
async fn repeated_query_params_keep_first_value() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;
    let client = reqwest::Client::new();
    common::login_demo(&server, &client).await?;

    let res = client
        .get(server.url("/api/grades?period=Trimestre%201&period=Trimestre%202"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["grades"]["period"], "Trimestre 1");

    let res = client
        .get(server.url("/api/homework?from=2024-01-20&from=2024-01-01"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["homework"].as_array().map(Vec::len), Some(1));

    let res = client
        .get(server.url("/api/timetable?from=2024-01-16&from=2024-01-01&to=2024-01-19"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["timetable"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn repeated_query_params_before_login_stay_in_envelope() -> Result<()> {
    let server = common::TestServer::spawn_fixture().await?;

    let res = reqwest::get(server.url("/api/grades?period=a&period=b")).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_AUTHENTICATED");
    Ok(())
}

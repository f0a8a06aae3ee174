//! HttpSwapiClient against a fake upstream.

use swapi_proxy::swapi::{HttpSwapiClient, SwapiClient};
use swapi_proxy::ErrorKind;

mod common;

#[tokio::test]
async fn test_get_starship_decodes_and_hits_expected_path() {
    let (addr, seen) = common::start_fake_upstream(|path| match path {
        "/api/starships/9/" => (200, common::UPSTREAM_DEATH_STAR.to_string()),
        _ => (404, r#"{"detail":"Not found"}"#.to_string()),
    })
    .await;
    let client = HttpSwapiClient::new(common::upstream_config(addr)).unwrap();

    let ship = client.get_starship(9).await.unwrap();

    assert_eq!(ship.name, "Death Star");
    assert_eq!(ship.class, "Deep Space Mobile Battlestation");
    assert_eq!(ship.mglt, "10");
    assert_eq!(ship.pilots, Some(Vec::new()));
    assert_eq!(seen.lock().unwrap().as_slice(), ["/api/starships/9/"]);
}

#[tokio::test]
async fn test_get_person_not_found() {
    let (addr, _) =
        common::start_fake_upstream(|_| (404, r#"{"detail":"Not found"}"#.to_string())).await;
    let client = HttpSwapiClient::new(common::upstream_config(addr)).unwrap();

    let err = client.get_person(1000).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), "Not found");
    assert_eq!(err.detail(), "person 1000 not found");
}

#[tokio::test]
async fn test_upstream_server_error_is_internal() {
    let (addr, _) = common::start_fake_upstream(|_| (503, "unavailable".to_string())).await;
    let client = HttpSwapiClient::new(common::upstream_config(addr)).unwrap();

    let err = client.get_starships().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.detail().contains("503"));
}

#[tokio::test]
async fn test_malformed_payload_is_internal() {
    let (addr, _) = common::start_fake_upstream(|_| (200, "<html>oops</html>".to_string())).await;
    let client = HttpSwapiClient::new(common::upstream_config(addr)).unwrap();

    let err = client.get_person(1).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.detail().starts_with("invalid payload"));
}

#[tokio::test]
async fn test_list_pages_pass_count_through() {
    let (addr, seen) = common::start_fake_upstream(|path| match path {
        "/api/people/" => (200, common::upstream_people_page()),
        "/api/starships/" => (200, common::upstream_starships_page()),
        _ => (404, String::new()),
    })
    .await;
    let client = HttpSwapiClient::new(common::upstream_config(addr)).unwrap();

    let people = client.get_people_list().await.unwrap();
    let ships = client.get_starships().await.unwrap();

    assert_eq!(people.count, 82);
    assert_eq!(people.results.len(), 1);
    assert_eq!(people.results[0].name, "Luke Skywalker");
    assert_eq!(ships.count, 36);
    assert_eq!(ships.results[0].name, "Death Star");
    assert_eq!(seen.lock().unwrap().len(), 2);
}

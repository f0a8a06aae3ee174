//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use swapi_proxy::config::UpstreamConfig;

/// Start a programmable fake upstream on an ephemeral port.
///
/// `f` receives the request path and returns `(status, body)`. Every path
/// seen is appended to the returned log.
pub async fn start_fake_upstream<F>(f: F) -> (SocketAddr, Arc<Mutex<Vec<String>>>)
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]).to_string();
                        let path = request
                            .split_whitespace()
                            .nth(1)
                            .unwrap_or("/")
                            .to_string();
                        log.lock().unwrap().push(path.clone());

                        let (status, body) = f(&path);
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen)
}

/// Upstream config pointing at a fake upstream.
#[allow(dead_code)]
pub fn upstream_config(addr: SocketAddr) -> UpstreamConfig {
    UpstreamConfig {
        base_url: format!("http://{}/api", addr),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        use_system_proxy: false,
        ..UpstreamConfig::default()
    }
}

/// Death Star as SWAPI returns it.
#[allow(dead_code)]
pub const UPSTREAM_DEATH_STAR: &str = r#"{
    "name": "Death Star",
    "model": "DS-1 Orbital Battle Station",
    "manufacturer": "Imperial Department of Military Research, Sienar Fleet Systems",
    "cost_in_credits": "1000000000000",
    "length": "120000",
    "max_atmosphering_speed": "n/a",
    "crew": "342,953",
    "passengers": "843,342",
    "cargo_capacity": "1000000000000",
    "consumables": "3 years",
    "hyperdrive_rating": "4.0",
    "MGLT": "10",
    "starship_class": "Deep Space Mobile Battlestation",
    "pilots": [],
    "films": ["https://swapi.dev/api/films/1/"],
    "created": "2014-12-10T16:36:50.509000Z",
    "edited": "2014-12-20T21:26:24.783000Z",
    "url": "https://swapi.dev/api/starships/9/"
}"#;

/// Luke Skywalker as SWAPI returns him.
#[allow(dead_code)]
pub const UPSTREAM_LUKE: &str = r#"{
    "name": "Luke Skywalker",
    "height": "172",
    "mass": "77",
    "hair_color": "blond",
    "skin_color": "fair",
    "eye_color": "blue",
    "birth_year": "19BBY",
    "gender": "male",
    "homeworld": "https://swapi.dev/api/planets/1/",
    "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
    "species": [],
    "vehicles": ["https://swapi.dev/api/vehicles/14/"],
    "starships": ["https://swapi.dev/api/starships/12/", "https://swapi.dev/api/starships/22/"],
    "created": "2014-12-09T13:50:51.644000Z",
    "edited": "2014-12-20T21:17:56.891000Z",
    "url": "https://swapi.dev/api/people/1/"
}"#;

/// First page of the people listing.
#[allow(dead_code)]
pub fn upstream_people_page() -> String {
    format!(
        r#"{{"count": 82, "next": "https://swapi.dev/api/people/?page=2", "previous": null, "results": [{}]}}"#,
        UPSTREAM_LUKE
    )
}

/// First page of the starship listing.
#[allow(dead_code)]
pub fn upstream_starships_page() -> String {
    format!(
        r#"{{"count": 36, "next": "https://swapi.dev/api/starships/?page=2", "previous": null, "results": [{}]}}"#,
        UPSTREAM_DEATH_STAR
    )
}

//! Catalog loading from files and a local HTTP endpoint.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use tag_catalog::{CatalogCache, CatalogError, CatalogSource, CatalogStatus, load_catalog};
use tag_model::CatalogEntry;

/// Serve exactly one HTTP response on an ephemeral port and return its URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/api/product")
}

#[test]
fn loads_catalog_over_http() {
    let url = serve_once(
        "HTTP/1.1 200 OK",
        r#"[{"style_code": 1, "style_name": "Kurta", "mrp": 999}]"#,
    );
    let entries = load_catalog(&CatalogSource::parse(&url)).unwrap();
    assert_eq!(entries, vec![CatalogEntry::new(1, "Kurta", 999.0)]);
}

#[test]
fn server_error_is_reported_with_status() {
    let url = serve_once("HTTP/1.1 500 Internal Server Error", "oops");
    let err = load_catalog(&CatalogSource::parse(&url)).unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 500, .. }));
}

#[test]
fn loads_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"style_code": 3, "style_name": "Palazzo", "mrp": 749.5}]"#,
    )
    .unwrap();

    let entries = load_catalog(&CatalogSource::File(path)).unwrap();
    assert_eq!(entries[0].style_name, "Palazzo");
}

#[test]
fn cache_settles_ready_after_background_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"[{"style_code": 1}, {"style_code": 2}]"#).unwrap();

    let cache = CatalogCache::start(CatalogSource::File(path));
    let entries = cache.wait();
    assert_eq!(entries.len(), 2);
    assert!(matches!(cache.snapshot(), CatalogStatus::Ready(_)));
}

#[test]
fn failed_fetch_degrades_to_empty_catalog() {
    let cache = CatalogCache::start(CatalogSource::parse("does/not/exist.json"));
    assert!(cache.wait().is_empty());
    match cache.snapshot() {
        CatalogStatus::Failed(message) => assert!(message.contains("does/not/exist.json")),
        other => panic!("expected failure, got {other:?}"),
    }
}

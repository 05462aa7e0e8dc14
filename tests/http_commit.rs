//! HTTP stop updater tests.
//!
//! Request shapes, the failure path against an address nothing listens on,
//! and retries against a scripted local server.

mod fixtures;

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use fixtures::*;
use stop_sequencer::http::{HttpCommitError, HttpConfig, HttpStopUpdater, StopRequest};
use stop_sequencer::{EditorSession, SaveError, SequenceCommitter, StopKind};

/// Serves one connection per status in `statuses`, answering in order, and
/// returns the request lines and bodies it saw.
fn scripted_server(statuses: Vec<u16>) -> (String, JoinHandle<Vec<(String, String)>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for status in statuses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut content_length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header.trim().is_empty() {
                    break;
                }
                let lower = header.to_ascii_lowercase();
                if let Some(value) = lower.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
            }
            let mut body = vec![0; content_length];
            reader.read_exact(&mut body).unwrap();

            let reply = format!(
                "HTTP/1.1 {} Scripted\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status
            );
            reader.get_mut().write_all(reply.as_bytes()).unwrap();
            seen.push((
                request_line.trim().to_string(),
                String::from_utf8(body).unwrap(),
            ));
        }
        seen
    });

    (base_url, handle)
}

fn unreachable_config() -> HttpConfig {
    HttpConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
    }
}

#[test]
fn test_request_bodies_serialize_camel_case() {
    let points = morning_run_with_new_child();

    match StopRequest::for_point("http://api.test", &points[0]) {
        StopRequest::Update { url, body } => {
            assert_eq!(url, "http://api.test/stops/101");
            assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "order": 1 }));
        }
        other => panic!("expected update, got {:?}", other),
    }

    match StopRequest::for_point("http://api.test", &points[6]) {
        StopRequest::Create { url, body } => {
            assert_eq!(url, format!("http://api.test/schedules/{}/stops", SCHEDULE));
            let json = serde_json::to_value(&body).unwrap();
            assert_eq!(json["childName"], "Dawid");
            assert_eq!(json["kind"], "pickup");
            assert_eq!(json["order"], 7);
        }
        other => panic!("expected create, got {:?}", other),
    }
}

#[test]
fn test_unreachable_server_fails_commit() {
    let mut updater = HttpStopUpdater::new(unreachable_config()).unwrap();
    let err = updater.commit(&morning_run()).unwrap_err();
    assert!(matches!(err, HttpCommitError::Http(_)));
}

#[test]
fn test_failed_http_save_keeps_session_open() {
    let mut updater = HttpStopUpdater::new(unreachable_config()).unwrap();
    let mut session = EditorSession::default();
    session.open(&morning_run());
    session.move_down(0).unwrap();

    let err = session.save(&mut updater).unwrap_err();
    assert!(matches!(err, SaveError::Commit(HttpCommitError::Http(_))));
    assert!(session.is_open());
    assert!(session.has_pending_changes());
}

#[test]
fn test_empty_sequence_commits_without_requests() {
    let mut updater = HttpStopUpdater::new(unreachable_config()).unwrap();
    assert!(updater.commit(&[]).is_ok());
}

#[test]
fn test_retry_does_not_recreate_stops() {
    let points = vec![
        stop("new-1", StopKind::Pickup, "Dawid", "ul. Wspolna 3", None, 1).injected(),
        stop("new-2", StopKind::Dropoff, "Dawid", "SP 12", None, 2).injected(),
    ];
    // First attempt: new-1 created, new-2 fails. Retry: only new-2 is sent.
    let (base_url, server) = scripted_server(vec![201, 500, 201]);
    let mut updater = HttpStopUpdater::new(HttpConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap();

    let err = updater.commit(&points).unwrap_err();
    assert!(matches!(
        err,
        HttpCommitError::Rejected { ref stop_id, status: 500 } if stop_id == "new-2"
    ));
    updater.commit(&points).unwrap();

    let seen = server.join().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|(line, _)| line.starts_with("POST /schedules/")));
    assert!(seen[0].1.contains("\"kind\":\"pickup\""));
    assert!(seen[1].1.contains("\"kind\":\"dropoff\""));
    assert!(seen[2].1.contains("\"kind\":\"dropoff\""));
}

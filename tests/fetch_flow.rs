//! End-to-end fetch flow against a loopback stub server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use stancescope::predictions::{EntityFilter, FilterCriteria, StanceFilter, fetch_predictions};

/// Serve one canned HTTP response and hand back the request line the client
/// sent, so assertions can inspect the path and query string.
fn serve_once(body: &str) -> (String, mpsc::Receiver<String>) {
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let read = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..read]);
            let _ = tx.send(request.lines().next().unwrap_or("").to_string());
            let _ = stream.write_all(response.as_bytes());
        }
    });
    (format!("http://{addr}"), rx)
}

fn query_pairs(request_line: &str) -> Vec<(String, String)> {
    let path = request_line
        .split_whitespace()
        .nth(1)
        .expect("request line has a path");
    let url = url::Url::parse(&format!("http://stub{path}")).unwrap();
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn fetch_sends_the_five_wire_parameters_and_sorts_the_result() {
    let body = r#"[
        { "text": "Storm closes the northern pass.", "stance": "STANCE_NEU", "score": 0.62,
          "metadata": { "filename": "z9.txt", "source": "Zeta News", "date": "2021-06-01" },
          "spans": [ { "label": "LOC", "start": 17, "end": 30 } ] },
        { "text": "Council approves the harbor upgrade.", "stance": "STANCE_POS", "score": 0.91,
          "metadata": { "filename": "a4.txt", "source": "Alpha Times", "date": "2021-06-02" },
          "spans": [] }
    ]"#;
    let (base, rx) = serve_once(body);

    let criteria = FilterCriteria {
        source: "All News Today".into(),
        entity: EntityFilter::Person,
        stance: StanceFilter::Positive,
        min_score: 0.8,
        limit: 25,
    };
    let records = fetch_predictions(&base, &criteria).unwrap();

    let request_line = rx.recv().unwrap();
    assert!(request_line.starts_with("GET /predictions?"));
    assert_eq!(
        query_pairs(&request_line),
        vec![
            ("source".to_string(), "All News Today".to_string()),
            ("entities".to_string(), "PER".to_string()),
            ("stances".to_string(), "STANCE_POS".to_string()),
            ("min_score".to_string(), "0.8".to_string()),
            ("limit".to_string(), "25".to_string()),
        ]
    );

    let sources: Vec<&str> = records
        .iter()
        .map(|record| record.metadata.source.as_str())
        .collect();
    assert_eq!(sources, vec!["Alpha Times", "Zeta News"]);
    assert_eq!(records[1].spans[0].excerpt(&records[1].text), "northern pass");
}

#[test]
fn out_of_range_criteria_are_clamped_before_hitting_the_wire() {
    let (base, rx) = serve_once("[]");
    let criteria = FilterCriteria {
        source: String::new(),
        entity: EntityFilter::Any,
        stance: StanceFilter::Any,
        min_score: 2.5,
        limit: 100_000,
    };
    let records = fetch_predictions(&base, &criteria).unwrap();
    assert!(records.is_empty());

    let pairs = query_pairs(&rx.recv().unwrap());
    let value = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert_eq!(value("min_score"), "1");
    assert_eq!(value("limit"), "500");
    assert_eq!(value("source"), "");
    assert_eq!(value("entities"), "");
    assert_eq!(value("stances"), "");
}

//! Development static server for the farm portal.
//!
//! Serves the compiled WASM bundle from `dist/` on port 8080, with every
//! unknown path falling back to `index.html` so client-side routes survive
//! a hard refresh. Not intended for production; the real API lives behind
//! its own origin.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("Failed to bind to port 8080");

    println!("Farm portal dev server running at http://{}", ADDR);
    println!("Serving from {}/ with SPA fallback", DIST);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let reader = BufReader::new(&mut stream);
    let request_line = match reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split_once('?').map(|(p, _)| p).unwrap_or(full_path);

    let (body, content_type, status) = load(path);

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

/// Resolve a request path to file bytes. Directories, missing files and
/// anything outside `dist/` fall back to the SPA entry point.
fn load(path: &str) -> (Vec<u8>, &'static str, &'static str) {
    let mut candidate = PathBuf::from(DIST);
    let relative = path.trim_start_matches('/');
    if !relative.is_empty() && !relative.contains("..") {
        candidate.push(relative);
    }

    if candidate.is_file() {
        if let Ok(bytes) = fs::read(&candidate) {
            return (bytes, content_type_for(&candidate), "200 OK");
        }
    }

    match fs::read(PathBuf::from(DIST).join("index.html")) {
        Ok(bytes) => (bytes, "text/html; charset=utf-8", "200 OK"),
        Err(_) => {
            eprintln!("dist/index.html not found; build the bundle first");
            (
                b"<!DOCTYPE html><html><body><h1>Bundle not built</h1></body></html>".to_vec(),
                "text/html; charset=utf-8",
                "404 NOT FOUND",
            )
        }
    }
}

fn content_type_for(path: &PathBuf) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

//! Webhook transport: blocking TCP accept loop with minimal HTTP framing.
//! Reference data is loaded before the listener binds, so every request
//! sees a fully built, read-only snapshot.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

use crate::data::ReferenceData;
use crate::resolver::BotConfig;

pub mod routes;
pub mod webhook;

pub fn run_server(
    bind_addr: &str,
    data: &ReferenceData,
    config: &BotConfig,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!("nekobot listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream, data, config) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(
    stream: &mut TcpStream,
    data: &ReferenceData,
    config: &BotConfig,
) -> std::io::Result<()> {
    let mut buffer = [0_u8; 65_536];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let request_line = request.lines().next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");

    let body = request
        .split("\r\n\r\n")
        .nth(1)
        .or_else(|| request.split("\n\n").nth(1))
        .unwrap_or("");

    let response = routes::route_request(method, path, body, data, config).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}

use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;

pub const FILE_SERVER_PORT: u16 = 8000;

// One request answered by the server thread.
#[derive(Clone, Debug)]
pub struct ServeEvent {
    pub path: String,
    pub status: u16,
}

/// Static file server for the project directory, the dev-server the
/// prototype ships alongside the game. Requests are answered on a background
/// thread; the game never blocks on it.
pub struct FileServer {
    recv: Receiver<ServeEvent>,
    port: u16,
}

impl FileServer {
    /// Bind `port` (0 picks an ephemeral one) and serve files under `root`
    /// until the process exits or the `FileServer` is dropped.
    pub fn bind(root: &Path, port: u16) -> Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", port))
            .with_context(|| format!("could not bind file server port {port}"))?;
        let port = listener.local_addr()?.port();
        let root = root.to_owned();
        let (send, recv) = unbounded();

        thread::spawn(move || serve_loop(listener, root, send));

        Ok(Self { recv, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Drain request events recorded since the last call.
    pub fn recv(&self) -> impl Iterator<Item = ServeEvent> + '_ {
        self.recv.try_iter()
    }
}

fn serve_loop(listener: TcpListener, root: PathBuf, send: Sender<ServeEvent>) {
    for stream in listener.incoming() {
        let mut stream = match stream {
            Ok(stream) => stream,
            Err(err) => {
                warn!("file server accept failed: {err}");
                continue;
            }
        };

        match serve_one(&mut stream, &root) {
            // A closed receiver means the owner is gone; stop serving.
            Ok(event) => {
                if send.send(event).is_err() {
                    return;
                }
            }
            Err(err) => warn!("file server request failed: {err}"),
        }
    }
}

fn serve_one(stream: &mut TcpStream, root: &Path) -> Result<ServeEvent> {
    let mut reader = BufReader::new(stream.try_clone()?);

    // "GET /path HTTP/1.1"
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let raw_path = parts.next().unwrap_or("/");

    // Drain the header block.
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    let path = if raw_path == "/" { "/index.html" } else { raw_path };
    let relative = path.trim_start_matches('/');

    // Refuse anything but plain GETs inside the root.
    if method != "GET" || relative.split('/').any(|part| part == "..") {
        write_response(stream, 404, b"not found")?;
        return Ok(ServeEvent {
            path: raw_path.to_owned(),
            status: 404,
        });
    }

    match std::fs::read(root.join(relative)) {
        Ok(body) => {
            write_response(stream, 200, &body)?;
            Ok(ServeEvent {
                path: raw_path.to_owned(),
                status: 200,
            })
        }
        Err(_) => {
            write_response(stream, 404, b"not found")?;
            Ok(ServeEvent {
                path: raw_path.to_owned(),
                status: 404,
            })
        }
    }
}

fn write_response(stream: &mut TcpStream, status: u16, body: &[u8]) -> Result<()> {
    let reason = match status {
        200 => "OK",
        _ => "Not Found",
    };
    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )?;
    stream.write_all(body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn get(port: u16, path: &str) -> String {
        let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
        write!(stream, "GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn serves_files_and_reports_requests() {
        let root = std::env::temp_dir().join(format!("isowalk-serve-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("index.html"), "<html>grid</html>").unwrap();

        let server = FileServer::bind(&root, 0).unwrap();

        let response = get(server.port(), "/");
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.ends_with("<html>grid</html>"), "{response}");

        let response = get(server.port(), "/missing.png");
        assert!(response.starts_with("HTTP/1.1 404 Not Found"), "{response}");

        let events: Vec<_> = server.recv().collect();
        assert_eq!(events.len(), 2);
        assert_eq!((events[0].path.as_str(), events[0].status), ("/", 200));
        assert_eq!(
            (events[1].path.as_str(), events[1].status),
            ("/missing.png", 404)
        );

        let _ = std::fs::remove_dir_all(&root);
    }
}

use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a minimal pet clinic: owner and pet forms, owner creation that
/// redirects to `/owners/<n>`, and pet creation that redirects back.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_petclinic_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let next_owner = Arc::new(AtomicU64::new(1));

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let next_owner = Arc::clone(&next_owner);
                    thread::spawn(move || handle_client(stream, &next_owner));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

/// Reserve a local port with nothing listening on it.
///
/// # Errors
///
/// Returns an error if no port can be bound.
pub fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

fn read_request(stream: &TcpStream) -> Option<(String, String)> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_owned();
    let path = parts.next()?.to_owned();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).ok()?;
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':')
            && name.eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;
    Some((method, path))
}

fn route(method: &str, path: &str, next_owner: &AtomicU64) -> String {
    let is_pet_form = path.starts_with("/owners/") && path.ends_with("/pets/new");
    match (method, path) {
        ("GET", "/") | ("GET", "/owners/new") => ok_page("<html>form</html>"),
        ("POST", "/owners/new") => {
            let id = next_owner.fetch_add(1, Ordering::Relaxed);
            redirect(&format!("/owners/{}", id))
        }
        ("GET", _) if is_pet_form => ok_page("<html>pet form</html>"),
        ("POST", _) if is_pet_form => {
            redirect(path.trim_end_matches("/pets/new"))
        }
        _ => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_owned(),
    }
}

fn ok_page(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

fn redirect(location: &str) -> String {
    format!(
        "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        location
    )
}

fn handle_client(mut stream: TcpStream, next_owner: &AtomicU64) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some((method, path)) = read_request(&stream) else {
        return;
    };
    let response = route(&method, &path, next_owner);
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `petclinic-load` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_petclinic_load<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = petclinic_load_bin()?;
    Command::new(bin)
        .args(args)
        .env("PETCLINIC_LOAD_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("PETCLINIC_LOAD_HOST")
        .output()
        .map_err(|err| format!("run petclinic-load failed: {}", err))
}

fn petclinic_load_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_petclinic-load").map_or_else(
        || Err("CARGO_BIN_EXE_petclinic-load missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

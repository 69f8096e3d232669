//! In-process HTTP stub standing in for the user directory, plus a log
//! capture for asserting on emitted events.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// A directory stub that answers exactly one request.
pub struct StubDirectory {
    endpoint: Url,
    request: JoinHandle<io::Result<String>>,
}

impl StubDirectory {
    /// Users endpoint on the stub.
    pub fn endpoint(&self) -> Url {
        self.endpoint.clone()
    }

    /// Waits for the stub to answer and returns the request head it received,
    /// lowercased.
    ///
    /// # Errors
    ///
    /// Returns any I/O error the stub hit while serving.
    pub async fn request_head(self) -> io::Result<String> {
        self.request.await.map_err(io::Error::other)?
    }
}

/// Starts a stub that answers one request with `status_line` and `body`.
///
/// # Errors
///
/// Returns an error when the listener cannot be bound.
pub async fn serve_once(status_line: &str, body: &str) -> io::Result<StubDirectory> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let endpoint = Url::parse(&format!("http://{addr}/users")).map_err(io::Error::other)?;
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    let request = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await?;
        let head = read_request_head(&mut stream).await?;
        stream.write_all(response.as_bytes()).await?;
        stream.shutdown().await?;
        Ok::<_, io::Error>(head)
    });

    Ok(StubDirectory { endpoint, request })
}

/// Returns an endpoint on a port nothing listens on.
///
/// # Errors
///
/// Returns an error when a throwaway listener cannot be bound.
pub async fn refused_endpoint() -> io::Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Url::parse(&format!("http://{addr}/users")).map_err(io::Error::other)
}

async fn read_request_head(stream: &mut TcpStream) -> io::Result<String> {
    let mut head = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        head.extend_from_slice(chunk.get(..read).unwrap_or_default());
    }
    Ok(String::from_utf8_lossy(&head).to_lowercase())
}

/// Formatted log output collected from a thread-local subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Installs a plain-text subscriber writing into `self` for the current
    /// thread until the guard drops.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

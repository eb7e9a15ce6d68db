#![allow(dead_code)]

use std::net::SocketAddr;

use chat_relay::{server, AppState};
use tokio::{net::TcpListener, sync::mpsc, task::JoinHandle};

pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn base(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Fresh relay on an ephemeral port with empty state.
pub async fn spawn_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::default();

    let handle = tokio::spawn(server::serve(listener, state.clone(), std::future::pending()));

    TestServer { addr, state, handle }
}

/// Input already typed and closed, like stdin at end of file.
pub fn typed(text: &[&str]) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(text.len().max(1));
    for line in text {
        tx.try_send(line.to_string()).unwrap();
    }
    rx
}

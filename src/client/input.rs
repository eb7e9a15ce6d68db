use std::io::Write;

use tokio::sync::mpsc;

use crate::wire::UsersResponse;

use super::RelayClient;

/// Typed on its own line, lists active users instead of being sent.
pub const WHO: &str = "/who";

/// Lines from stdin, read on a plain thread.
///
/// A blocking read can't be cancelled, so it must not sit on the runtime's
/// blocking pool: shutting the runtime down would wait for the next Enter.
/// The thread ends with the process, or at end of input.
pub fn stdin_lines() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Sends every non-blank line as `user`. Returns once the sending side of
/// `lines` is gone.
///
/// Failures are written to `out` and the loop carries on.
pub async fn input_loop<W>(client: &RelayClient, user: &str, mut lines: mpsc::Receiver<String>, mut out: W) -> anyhow::Result<()>
where
    W: Write,
{
    while let Some(line) = lines.recv().await {
        if line.trim().is_empty() {
            continue;
        }

        if line.trim() == WHO {
            match client.users().await {
                Ok(UsersResponse { mut users }) => {
                    users.sort();
                    writeln!(out, "Active users: {}", users.join(", "))?;
                }
                Err(err) => writeln!(out, "Failed to list users: {err}")?,
            }
            continue;
        }

        if let Err(err) = client.send(user, &line).await {
            writeln!(out, "Failed to send message: {err}")?;
        }
    }

    Ok(())
}

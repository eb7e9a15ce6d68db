//! Command line and environment configuration.
//!
//! Every flag can also be set through the environment; `main` loads a `.env`
//! file before parsing, so the environment may come from there too.

use std::{
    io::{BufRead, Write},
    time::Duration,
};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use crate::{chat::ANON, client::{ClientConfig, POLL_INTERVAL, RETRY_INTERVAL}};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_SERVER: &str = "http://localhost:8081";

#[derive(Debug, Parser)]
#[command(name = "chat-relay", about = "Polling HTTP chat relay and terminal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the relay server.
    Serve(ServeConfig),
    /// Chat from the terminal through a running relay.
    Join(JoinConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServeConfig {
    /// Host name or IP address to bind.
    #[arg(long, env = "CHAT_RELAY_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "CHAT_RELAY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Ask for localhost or network binding on stdin instead.
    #[arg(long)]
    pub prompt: bool,
}

impl ServeConfig {
    pub fn localhost() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            prompt: false,
        }
    }

    pub fn link(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

#[derive(Debug, Clone, Args)]
pub struct JoinConfig {
    /// Name shown in front of your messages. Asked for on stdin when missing.
    #[arg(short, long, env = "CHAT_RELAY_USER")]
    pub user: Option<String>,

    /// Base URL of the relay.
    #[arg(long, env = "CHAT_RELAY_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Seconds between polls.
    #[arg(long, default_value_t = POLL_INTERVAL.as_secs())]
    pub poll_secs: u64,

    /// Seconds to wait after a failed poll.
    #[arg(long, default_value_t = RETRY_INTERVAL.as_secs())]
    pub retry_secs: u64,
}

impl JoinConfig {
    pub fn into_client_config(self, user: String) -> ClientConfig {
        ClientConfig {
            server: self.server,
            user,
            poll_interval: Duration::from_secs(self.poll_secs),
            retry_interval: Duration::from_secs(self.retry_secs),
        }
    }
}

/// Writes `question`, then reads one trimmed line. End of input reads as "".
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("couldn't read from stdin")?;
    Ok(line.trim().to_owned())
}

/// The interactive bind dialog: `2` binds a given address, anything else localhost.
pub fn prompt_bind<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<ServeConfig> {
    let choice = ask(input, output, "Run server on (1) localhost or (2) network? [1/2]: ")?;
    if choice != "2" {
        return Ok(ServeConfig::localhost());
    }

    let host = ask(input, output, "Enter IP address to bind (e.g., 192.168.1.100): ")?;
    if host.is_empty() {
        bail!("no IP address given");
    }
    let port = ask(input, output, "Enter port number (e.g., 8081): ")?;
    let port = port
        .parse()
        .with_context(|| format!("invalid port {port:?}"))?;

    Ok(ServeConfig { host, port, prompt: false })
}

pub fn prompt_user<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<String> {
    let user = ask(input, output, "Enter your username: ")?;
    Ok(or_anon(user))
}

pub fn or_anon(user: String) -> String {
    if user.trim().is_empty() {
        ANON.to_owned()
    } else {
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_prompt(stdin: &str) -> (anyhow::Result<ServeConfig>, String) {
        let mut input = stdin.as_bytes();
        let mut output = Vec::new();
        let config = prompt_bind(&mut input, &mut output);
        (config, String::from_utf8(output).unwrap())
    }

    #[test]
    fn localhost_choice() {
        let (config, shown) = run_prompt("1\n");
        assert_eq!(config.unwrap(), ServeConfig::localhost());
        assert!(shown.starts_with("Run server on"));
    }

    #[test]
    fn anything_but_two_is_localhost() {
        for stdin in ["", "\n", "3\n", "network\n"] {
            assert_eq!(run_prompt(stdin).0.unwrap(), ServeConfig::localhost());
        }
    }

    #[test]
    fn network_choice() {
        let (config, _) = run_prompt("2\n192.168.1.100\n9000\n");
        let config = config.unwrap();
        assert_eq!(config.host, "192.168.1.100");
        assert_eq!(config.port, 9000);
        assert_eq!(config.link(), "http://192.168.1.100:9000/");
    }

    #[test]
    fn bad_port_is_an_error() {
        let (config, _) = run_prompt("2\n0.0.0.0\neighty\n");
        assert!(config.unwrap_err().to_string().contains("invalid port"));

        let (config, _) = run_prompt("2\n0.0.0.0\n70000\n");
        assert!(config.is_err());
    }

    #[test]
    fn missing_ip_is_an_error() {
        assert!(run_prompt("2\n\n").0.is_err());
    }

    #[test]
    fn blank_username_is_anon() {
        let mut output = Vec::new();
        assert_eq!(prompt_user(&mut "  \n".as_bytes(), &mut output).unwrap(), "anon");
        assert_eq!(prompt_user(&mut "alice\n".as_bytes(), &mut output).unwrap(), "alice");
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["chat-relay", "serve"]).unwrap();
        let Command::Serve(config) = cli.command else {
            panic!("expected serve");
        };
        // env may override these on a developer machine
        if std::env::var_os("CHAT_RELAY_HOST").is_none() && std::env::var_os("CHAT_RELAY_PORT").is_none() {
            assert_eq!(config, ServeConfig::localhost());
        }

        let cli = Cli::try_parse_from(["chat-relay", "join", "--user", "bob", "--poll-secs", "3"]).unwrap();
        let Command::Join(config) = cli.command else {
            panic!("expected join");
        };
        assert_eq!(config.user.as_deref(), Some("bob"));
        let config = config.into_client_config("bob".to_owned());
        assert_eq!(config.poll_interval, Duration::from_secs(3));
        assert_eq!(config.retry_interval, RETRY_INTERVAL);
    }
}

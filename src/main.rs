use std::io;

use chat_relay::{
    client,
    config::{self, Cli, Command},
    logging, server, AppState,
};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(config) => {
            logging::init_tracing(logging::SERVER_FILTER)?;

            let config = if config.prompt {
                config::prompt_bind(&mut io::stdin().lock(), &mut io::stdout())?
            } else {
                config
            };

            let listener = server::bind(&config).await?;
            info!("Chat server started at {}", config.link());
            server::serve(listener, AppState::default(), server::shutdown_signal()).await
        }
        Command::Join(config) => {
            logging::init_tracing(logging::CLIENT_FILTER)?;

            let user = match config.user.clone() {
                Some(user) => config::or_anon(user),
                None => config::prompt_user(&mut io::stdin().lock(), &mut io::stdout())?,
            };
            client::run(config.into_client_config(user)).await
        }
    }
}

pub mod views;

use postd::{bootstrap::Bootstrap, dependencies::config, domain::commands::Command, services::handlers::AppHandler};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
	println!("Environment Variable Is Being Set...");
	let config = match config() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("{err}");
			std::process::exit(1);
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("postd={}", config.log_level).into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let mut ctx = match Bootstrap::app_context().await {
		Ok(ctx) => ctx,
		Err(err) => {
			tracing::error!("failed to initialise: {}", err);
			std::process::exit(1);
		}
	};
	println!("{}", views::render(&ctx));

	// One JSON command per line, e.g. {"type":"select_tab","tab":"map"}
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	loop {
		let line = match lines.next_line().await {
			Ok(Some(line)) => line,
			Ok(None) => break,
			Err(err) => {
				tracing::error!("failed to read input: {}", err);
				break;
			}
		};
		if line.trim().is_empty() {
			continue;
		}

		let command = match serde_json::from_str::<Command>(&line) {
			Ok(command) => command,
			Err(err) => {
				println!("Wrong input was given: {err}");
				continue;
			}
		};

		match AppHandler::handle(&mut ctx, command).await {
			Ok(response) => match serde_json::to_string(&response) {
				Ok(json) => println!("{json}"),
				Err(err) => tracing::error!("failed to encode response: {}", err),
			},
			Err(err) => match err.notice() {
				Some(notice) => println!("{notice}"),
				None => println!("error: {err}"),
			},
		}
		println!("{}", views::render(&ctx));
	}

	ctx.teardown();
}

use std::sync::Arc;

use adprice_app::command::{Command, HELP};
use adprice_app::{
    init_tracing, ActionOutcome, AdService, AppConfig, Cli, InputEvent, Notifier, Presenter,
    UreqTransport,
};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Shows notifications as a framed block on stderr.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("\n+-- notice ------------------------------");
        for line in message.lines() {
            eprintln!("| {line}");
        }
        eprintln!("+----------------------------------------");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let config = AppConfig::try_from(Cli::parse())?;
    info!(base_url = %config.base_url, locale = %config.locale, "starting ad pricing client");

    let transport = Arc::new(UreqTransport::new(config.timeout));
    let service = AdService::new(&config.base_url, transport);
    let presenter = Presenter::new(service, Arc::new(TerminalNotifier), config.locale);
    presenter
        .on_placeholder_change(|visible| debug!(visible, "placeholder visibility"))
        .await;

    println!("{HELP}\n");
    println!("{}", presenter.render().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => println!("{}", presenter.render().await),
            Command::Focus => {
                presenter.handle_input(InputEvent::FocusGained).await;
                println!("{}", presenter.render().await);
            }
            Command::Blur => {
                presenter.handle_input(InputEvent::FocusLost).await;
                println!("{}", presenter.render().await);
            }
            Command::Threshold(text) => {
                presenter.handle_input(InputEvent::TextChanged(text)).await;
                println!("{}", presenter.render().await);
            }
            Command::Average => {
                let p = presenter.clone();
                tokio::spawn(async move { show_if_updated(&p, p.get_average_cost().await).await });
            }
            Command::Above(text) => {
                if let Some(text) = text {
                    presenter.handle_input(InputEvent::TextChanged(text)).await;
                }
                let p = presenter.clone();
                tokio::spawn(async move { show_if_updated(&p, p.get_ads_above_cost().await).await });
            }
            Command::Popular => {
                let p = presenter.clone();
                tokio::spawn(async move { show_if_updated(&p, p.get_most_popular_ads().await).await });
            }
        }
    }

    info!("bye");
    Ok(())
}

async fn show_if_updated(presenter: &Presenter, outcome: ActionOutcome) {
    if outcome == ActionOutcome::Updated {
        println!("{}", presenter.render().await);
    }
}

use std::{fmt::Display, io::Write};

use anyhow::Result;
use chrono::TimeZone;
use explorer::{query, Explorer, Panel};
use tokio::{
    io::{stdin, AsyncBufReadExt, BufReader},
    select, signal,
};
use tracing::{info, warn};

use crate::render::Renderer;

const HELP: &str = "\
Enter a 64-character order id to look it up.
  :more <panel>   expand/collapse overview, source, destination or additional
  :reset, :new    clear the current search
  :json           print the current record as JSON
  :help           show this message
  :quit           exit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    More(Panel),
    Reset,
    Json,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let Some(command) = line.trim_start().strip_prefix(':') else {
            return if line.trim().is_empty() {
                Command::Empty
            } else {
                Command::Search(line.to_string())
            };
        };

        let mut words = command.split_whitespace();
        match (words.next(), words.next()) {
            (Some("more"), Some(panel)) => panel
                .parse()
                .map(Command::More)
                .unwrap_or_else(|err| Command::Unknown(err.to_string())),
            (Some("reset" | "new"), None) => Command::Reset,
            (Some("json"), None) => Command::Json,
            (Some("help"), None) => Command::Help,
            (Some("quit" | "q" | "exit"), None) => Command::Quit,
            _ => Command::Unknown(format!("unknown command `{line}`, try :help")),
        }
    }
}

/// Interactive search loop on stdin. Ends on `:quit`, EOF or Ctrl-C.
pub async fn run<Tz>(explorer: &Explorer, renderer: &Renderer<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = BufReader::new(stdin()).lines();
    println!("{HELP}");

    loop {
        print!("order id> ");
        std::io::stdout().flush()?;

        let line = select! {
            line = lines.next_line() => line?,
            res = signal::ctrl_c() => {
                if let Err(err) = res {
                    warn!("Unable to listen for shutdown signal: {err}");
                }
                None
            }
        };
        let Some(line) = line else {
            println!();
            break;
        };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Unknown(message) => println!("{message}"),
            Command::Reset => {
                explorer.reset().await;
                info!("Search cleared");
            }
            Command::More(panel) => {
                explorer.toggle(panel).await;
                print!("{}", renderer.render(&explorer.view().await));
            }
            Command::Json => match explorer.view().await.record {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("Nothing to show."),
            },
            Command::Search(order_id) => {
                explorer.set_query(&order_id).await;
                if !explorer.view().await.can_submit() {
                    println!(
                        "Order ID must be exactly {} characters.",
                        query::ORDER_ID_LEN
                    );
                    continue;
                }
                explorer.submit(&order_id).await?;
                print!("{}", renderer.render(&explorer.view().await));
            }
        }
    }

    Ok(())
}

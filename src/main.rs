//! Headless shell around the site core.
//!
//! Stands in for the browser: it owns an in-memory session history, persists
//! preferences to a JSON file, and reads one command per line from stdin.
//! Every state change is rendered by a subscribed listener as a JSON line on
//! stdout; the actions each command produces are printed after it.
//!
//! # Usage
//!
//! ```text
//! sticks-site [--config FILE] [--accept-language TAG] [URL]
//! ```
//!
//! `URL` is the initial location (default `/`). `TAG` plays the role of the
//! browser's preferred language (default `ko`).
//!
//! # Commands
//!
//! ```text
//! go PATH            push PATH                 key K [input|textarea|editable]
//! replace PATH       replace with PATH         lang ko|en
//! back / forward     move through history      toggle-lang
//! close              return to the home grid   open SLUG / close-item
//! mute               toggle narration mute     state
//! date ISO-DATE      format in site language   help / quit
//! ```
//!
//! # Output
//!
//! ```text
//! state {"currentSection":"about","language":"ko","appState":"expanding","portfolioSlug":null}
//! action PlayNarration { section: About, source: "/assets/audio/About.mp3", volume: 0.7 }
//! ```
//!
//! Logs go to stderr; see [`sticks_site::observability`].

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sticks_site::app::{handle_event, Event, KeyPress, KeyTarget, StateStore};
use sticks_site::infrastructure::{History, MemoryHistory};
use sticks_site::storage::JsonPreferences;
use sticks_site::{Config, Language, Result, Site, SiteError};

const HELP: &str = "\
commands:
  go PATH                         navigate to PATH
  replace PATH                    navigate to PATH, replacing the current entry
  back | forward                  move through history
  key K [input|textarea|editable] press key K
  lang ko|en                      switch language
  toggle-lang                     toggle language
  close                           close the open section
  open SLUG                       open a portfolio item
  close-item                      close the portfolio item
  mute                            toggle narration mute
  state                           print the current state and location
  date ISO-DATE                   format a date in the current language
  help                            show this help
  quit                            exit";

/// Headless shell for the Sticks & Stones site core.
#[derive(Parser, Debug)]
#[command(name = "sticks-site")]
#[command(about = "Drive the site router and state store from stdin")]
struct Args {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Preferred language of the visitor, as a browser would report it
    #[arg(long, value_name = "TAG", default_value = "ko")]
    accept_language: String,

    /// Initial location
    #[arg(default_value = "/")]
    url: String,
}

/// A parsed stdin line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Dispatch(Event),
    State,
    FormatDate(String),
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match (name, arg) {
        ("go", Some(path)) => Command::Dispatch(Event::navigate(path)),
        ("replace", Some(path)) => Command::Dispatch(Event::Navigate {
            path: path.to_string(),
            replace: true,
        }),
        ("back", None) => Command::Dispatch(Event::HistoryBack),
        ("forward", None) => Command::Dispatch(Event::HistoryForward),
        ("key", Some(key)) => {
            let target = match words.next() {
                None => KeyTarget::Document,
                Some("input") => KeyTarget::Input,
                Some("textarea") => KeyTarget::TextArea,
                Some("editable") => KeyTarget::ContentEditable,
                Some(other) => return Err(format!("unknown key target: {other}")),
            };
            Command::Dispatch(Event::Key(KeyPress::new(key).on(target)))
        }
        ("lang", Some(tag)) => {
            let language: Language = tag.parse().map_err(|e: SiteError| e.to_string())?;
            Command::Dispatch(Event::SwitchLanguage(language))
        }
        ("toggle-lang", None) => Command::Dispatch(Event::ToggleLanguage),
        ("close", None) => Command::Dispatch(Event::CloseSection),
        ("open", Some(slug)) => Command::Dispatch(Event::OpenPortfolioItem { slug: slug.to_string() }),
        ("close-item", None) => Command::Dispatch(Event::ClosePortfolioItem),
        ("mute", None) => Command::Dispatch(Event::ToggleMute),
        ("state", None) => Command::State,
        ("date", Some(date)) => Command::FormatDate(date.to_string()),
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        _ => return Err(format!("unrecognized command: {}", line.trim())),
    };

    Ok(Some(command))
}

fn render_listener() -> sticks_site::app::Listener {
    StateStore::listener(|state| {
        let json = serde_json::to_string(state).map_err(|e| SiteError::Subscriber(e.to_string()))?;
        println!("state {json}");
        Ok(())
    })
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    sticks_site::observability::init_tracing(&config);

    let span = tracing::debug_span!("shell");
    let _guard = span.enter();
    tracing::debug!(config = ?args.config, url = %args.url, "starting shell");

    let preferences = JsonPreferences::new(config.preferences_path())?;
    let history = MemoryHistory::new(&args.url);
    let mut site = sticks_site::initialize(&config, history, preferences);

    let _render = site.store().subscribe(render_listener());
    site.start(&args.accept_language);
    println!("location {}", site.router.history().pathname());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("error {message}");
                continue;
            }
        };

        match command {
            Command::Dispatch(event) => dispatch(&mut site, &event),
            Command::State => print_state(&site)?,
            Command::FormatDate(date) => match site.state().language.format_date(&date) {
                Ok(formatted) => println!("date {formatted}"),
                Err(e) => println!("error {e}"),
            },
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
        io::stdout().flush()?;
    }

    tracing::debug!("shell finished");
    Ok(())
}

fn dispatch(site: &mut Site<MemoryHistory, JsonPreferences>, event: &Event) {
    match handle_event(site, event) {
        Ok((consumed, actions)) => {
            if !consumed {
                println!("ignored");
            }
            for action in actions {
                println!("action {action:?}");
            }
            println!("location {}", site.router.history().pathname());
        }
        Err(e) => {
            tracing::error!(error = %e, "error handling event");
            println!("error {e}");
        }
    }
}

fn print_state(site: &Site<MemoryHistory, JsonPreferences>) -> Result<()> {
    let state = site.state();
    let json = serde_json::to_string(&state).map_err(|e| SiteError::Storage(e.to_string()))?;
    println!("state {json}");
    println!("location {}", site.router.history().pathname());
    println!("panel {}", if state.app_state.is_open() { "open" } else { "closed" });
    println!("muted {}", site.narration.is_muted());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "sticks-site failed");
            eprintln!("sticks-site: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_options_and_initial_url() {
        let parsed = Args::try_parse_from([
            "sticks-site",
            "--accept-language",
            "en-US",
            "/en/about",
            "--config",
            "site.toml",
        ])
        .unwrap();
        assert_eq!(parsed.accept_language, "en-US");
        assert_eq!(parsed.url, "/en/about");
        assert_eq!(parsed.config, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn defaults_to_korean_root() {
        let parsed = Args::try_parse_from(["sticks-site"]).unwrap();
        assert_eq!(parsed.accept_language, "ko");
        assert_eq!(parsed.url, "/");
        assert_eq!(parsed.config, None);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Args::try_parse_from(["sticks-site", "--config"]).is_err());
        assert!(Args::try_parse_from(["sticks-site", "--verbose"]).is_err());
        assert!(Args::try_parse_from(["sticks-site", "/", "/about"]).is_err());
    }

    #[test]
    fn maps_commands_to_events() {
        assert_eq!(
            parse_command("go /en/services").unwrap(),
            Some(Command::Dispatch(Event::navigate("/en/services")))
        );
        assert_eq!(
            parse_command("key e textarea").unwrap(),
            Some(Command::Dispatch(Event::Key(KeyPress::new("e").on(KeyTarget::TextArea))))
        );
        assert_eq!(
            parse_command("lang en").unwrap(),
            Some(Command::Dispatch(Event::SwitchLanguage(Language::En)))
        );
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
        assert_eq!(
            parse_command("date 2023-01-15").unwrap(),
            Some(Command::FormatDate("2023-01-15".to_string()))
        );
    }

    #[test]
    fn reports_malformed_commands() {
        assert!(parse_command("go").is_err());
        assert!(parse_command("lang fr").is_err());
        assert!(parse_command("key e window").is_err());
        assert!(parse_command("dance").is_err());
    }
}

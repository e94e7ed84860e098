//! Line-oriented front end for the cats record store.
//!
//! # Responsibility
//! - Turn stdin command lines into `CatService` calls.
//! - Map service results onto status-coded response lines.
//!
//! Commands: `create <json>`, `list`, `find <name>`, `version`, `quit`.
//! The `find` argument is everything after the first space, untrimmed.

use cats_core::{core_version, default_log_level, init_logging, Cat, CatService, RepoError};
use log::{info, warn};
use serde::Serialize;
use std::io::{self, BufRead, Write};

const LOG_LEVEL_ENV: &str = "CATS_LOG_LEVEL";
const LOG_DIR_ENV: &str = "CATS_LOG_DIR";

/// Outcome of one command line.
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Created,
    Ok(String),
    NotFound(String),
    BadRequest(String),
    InternalError(String),
    Quit,
}

impl Reply {
    fn render(&self) -> Option<String> {
        match self {
            Self::Created => Some("201 Created".to_string()),
            Self::Ok(body) => Some(format!("200 OK {body}")),
            Self::NotFound(message) => Some(format!("404 Not Found {message}")),
            Self::BadRequest(message) => Some(format!("400 Bad Request {message}")),
            Self::InternalError(message) => {
                Some(format!("500 Internal Server Error {message}"))
            }
            Self::Quit => None,
        }
    }
}

impl From<RepoError> for Reply {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(_) => Self::NotFound(value.to_string()),
        }
    }
}

fn handle_line(service: &CatService, line: &str) -> Option<Reply> {
    if line.trim().is_empty() {
        return None;
    }
    let line = line.trim_start();
    let (command, arg) = match line.split_once(' ') {
        Some((command, rest)) => (command, Some(rest)),
        None => (line.trim_end(), None),
    };

    let reply = match command {
        "create" => match serde_json::from_str::<Cat>(arg.unwrap_or_default()) {
            Ok(cat) => {
                service.create(cat);
                Reply::Created
            }
            Err(err) => Reply::BadRequest(format!("invalid cat: {err}")),
        },
        "list" => {
            let cats = service.find_all();
            let cats: Vec<&Cat> = cats.iter().map(|cat| cat.as_ref()).collect();
            render_json(&cats)
        }
        "find" => match arg {
            Some(name) => match service.find_one(name) {
                Ok(cat) => render_json(cat.as_ref()),
                Err(err) => err.into(),
            },
            None => Reply::BadRequest("find requires a name".to_string()),
        },
        "version" => Reply::Ok(core_version().to_string()),
        "quit" | "exit" => Reply::Quit,
        other => Reply::BadRequest(format!("unknown command `{other}`")),
    };
    Some(reply)
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> Reply {
    match serde_json::to_string(value) {
        Ok(body) => Reply::Ok(body),
        Err(err) => Reply::InternalError(format!("failed to encode response: {err}")),
    }
}

fn setup_logging() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn run(service: &CatService, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(reply) = handle_line(service, &line) else {
            continue;
        };
        match reply.render() {
            Some(rendered) => writeln!(output, "{rendered}")?,
            None => break,
        }
        output.flush()?;
    }
    Ok(())
}

fn main() {
    setup_logging();
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let service: CatService = CatService::default();
    let stdin = io::stdin();
    if let Err(err) = run(&service, stdin.lock(), io::stdout().lock()) {
        warn!("event=cli_io module=cli status=error error={err}");
        eprintln!("io error: {err}");
        std::process::exit(1);
    }
}

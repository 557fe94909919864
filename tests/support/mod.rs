//! Shared fakes for the renderer tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::{Mutex, OnceLock};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use welcome::{Page, WhoAmI, WhoAmIClient};

/// In-memory page: a query string and the `#body` contents.
pub struct FakePage {
    pub search: String,
    pub root: RefCell<Option<String>>,
    pub has_root: bool,
}

impl FakePage {
    pub const INITIAL: &'static str = "<p class=\"hint\">Not signed in.</p>";

    pub fn new(search: &str) -> Self {
        Self {
            search: search.to_string(),
            root: RefCell::new(Some(Self::INITIAL.to_string())),
            has_root: true,
        }
    }

    pub fn without_root(search: &str) -> Self {
        Self {
            search: search.to_string(),
            root: RefCell::new(None),
            has_root: false,
        }
    }

    pub fn root_html(&self) -> Option<String> {
        self.root.borrow().clone()
    }
}

impl Page for FakePage {
    fn query_string(&self) -> String {
        self.search.clone()
    }

    fn replace_root_html(&self, html: &str) -> Result<()> {
        if !self.has_root {
            return Err(anyhow!("element #body not found"));
        }
        *self.root.borrow_mut() = Some(html.to_string());
        Ok(())
    }
}

/// Canned whoami answers; records every token it was asked about.
pub enum Reply {
    Body(&'static str),
    TransportError,
}

pub struct FakeClient {
    reply: Reply,
    pub calls: RefCell<Vec<String>>,
}

impl FakeClient {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl WhoAmIClient for FakeClient {
    async fn whoami(&self, tokens: &str) -> Result<WhoAmI> {
        self.calls.borrow_mut().push(tokens.to_string());
        match self.reply {
            Reply::Body(body) => Ok(serde_json::from_str(body)?),
            Reply::TransportError => Err(anyhow!("connection refused")),
        }
    }
}

/// Global logger that keeps every formatted record for inspection.
struct CaptureLogger;

static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
static INIT: OnceLock<()> = OnceLock::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub fn capture_logs() {
    INIT.get_or_init(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// True if a record at `level` contains `needle`.
pub fn logged_at(level: log::Level, needle: &str) -> bool {
    RECORDS
        .lock()
        .map(|records| {
            records
                .iter()
                .any(|(l, msg)| *l == level && msg.contains(needle))
        })
        .unwrap_or(false)
}

/// True if an error-level record contains `needle`.
pub fn logged_error(needle: &str) -> bool {
    logged_at(log::Level::Error, needle)
}

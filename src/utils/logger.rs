// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Forwards `log` records into the console pane of the main window.
struct ConsoleLogger;

/// (tag name, foreground colour, bold)
const LEVEL_TAGS: [(&str, &str, bool); 4] = [
  ("error", "#ff4444", true),
  ("warn", "#ffbb33", false),
  ("info", "#33b5e5", false),
  ("debug", "#aaaaaa", false),
];

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  for (name, color, bold) in LEVEL_TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Info))
}

/// Terminal logging for command-line runs; `RUST_LOG` overrides the level.
pub fn init_cli() {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .format_timestamp(None)
    .try_init();
}

fn tag_for(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("🔴", "error"),
    Level::Warn => ("🟠", "warn"),
    Level::Info => ("🔵", "info"),
    Level::Debug | Level::Trace => ("⚪", "debug"),
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let (icon, tag_name) = tag_for(record.level());
    let msg = format!("{}  {}\n", icon, record.args());

    glib::MainContext::default().spawn_local(async move {
      if let Some(view) = LOG_VIEW.get().and_then(|weak| weak.upgrade()) {
        let buffer = view.buffer();
        let mut end = buffer.end_iter();
        buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

        // Auto-scroll
        let mark = buffer.create_mark(None, &buffer.end_iter(), false);
        view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
        buffer.delete_mark(&mark);
      }
    });
  }

  fn flush(&self) {}
}

// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Routes `log` records into the in-app activity console. Messages are
/// appended on the main context so records can be emitted from any callback.
struct ConsoleLogger;

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  if tag_table.lookup("error").is_none() {
    let tag = gtk4::TextTag::new(Some("error"));
    tag.set_property("foreground", "#f87171");
    tag.set_property("weight", 700);
    tag_table.add(&tag);
  }

  if tag_table.lookup("warn").is_none() {
    let tag = gtk4::TextTag::new(Some("warn"));
    tag.set_property("foreground", "#fbbf24");
    tag_table.add(&tag);
  }

  if tag_table.lookup("info").is_none() {
    let tag = gtk4::TextTag::new(Some("info"));
    tag.set_property("foreground", "#60a5fa");
    tag_table.add(&tag);
  }

  if tag_table.lookup("debug").is_none() {
    let tag = gtk4::TextTag::new(Some("debug"));
    tag.set_property("foreground", "#9ca3af");
    tag_table.add(&tag);
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Debug
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let tag_name = match record.level() {
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug | Level::Trace => "debug",
      };

      let msg = format!("[{}] {}\n", tag_name, record.args());

      glib::MainContext::default().spawn_local(async move {
        if let Some(weak_ref) = LOG_VIEW.get() {
          if let Some(view) = weak_ref.upgrade() {
            let buffer = view.buffer();
            let mut end = buffer.end_iter();

            buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

            // Auto-scroll
            let mark = buffer.create_mark(None, &buffer.end_iter(), false);
            view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
            buffer.delete_mark(&mark);
          }
        }
      });
    }
  }

  fn flush(&self) {}
}

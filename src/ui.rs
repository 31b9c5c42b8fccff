//! User interaction helpers for passgen.
//!
//! This module centralizes terminal output and clipboard interactions. No
//! generation logic should live here.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use console::style;

use crate::error::{AppError, Result};
use crate::generator::{CharacterPool, GenerationOptions};

/// Destination for copied passwords.
///
/// Writes are fire-and-forget from the generator's point of view: the caller
/// decides what to do with a failure.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
    fn read_text(&mut self) -> Result<String>;
}

/// The desktop clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("init failed: {}", e)))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| AppError::Clipboard(format!("set failed: {}", e)))
    }

    fn read_text(&mut self) -> Result<String> {
        self.inner
            .get_text()
            .map_err(|e| AppError::Clipboard(format!("get failed: {}", e)))
    }
}

/// Replace `text` with an empty string if the clipboard still holds it.
///
/// Returns `true` when the clipboard was cleared.
pub fn clear_if_unchanged<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> Result<bool> {
    if clipboard.read_text()? == text {
        clipboard.write_text("")?;
        return Ok(true);
    }
    Ok(false)
}

/// Clear the system clipboard after `secs` seconds unless something else was
/// copied in the meantime.
pub fn spawn_clear_after(text: String, secs: u64) -> JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(secs));

        match SystemClipboard::new().and_then(|mut cb| clear_if_unchanged(&mut cb, &text)) {
            Ok(true) => log::info!("clipboard cleared after {}s", secs),
            Ok(false) => log::debug!("clipboard changed, leaving it alone"),
            Err(e) => log::warn!("{}", e),
        }
    })
}

/// Copy to the system clipboard, printing a warning instead of failing.
///
/// Returns whether the copy happened.
pub fn copy_or_warn(text: &str) -> bool {
    report_copy(
        SystemClipboard::new().and_then(|mut cb| cb.write_text(text)),
        text.chars().count(),
    )
}

/// Log and print the outcome of a clipboard write of `chars` characters.
pub fn report_copy(result: Result<()>, chars: usize) -> bool {
    match result {
        Ok(()) => {
            log::info!("copied {} characters to the clipboard", chars);
            true
        }
        Err(e) => {
            log::debug!("clipboard write failed: {}", e);
            eprintln!("{} Failed to copy to clipboard: {}", style("warning:").yellow(), e);
            false
        }
    }
}

/// One-line summary of the active options.
pub fn describe_options(options: &GenerationOptions) -> String {
    let pool = CharacterPool::for_options(options);
    format!(
        "Length: {} | Numbers: {} | Special characters: {} | Pool: {}",
        options.length,
        on_off(options.include_digits),
        on_off(options.include_symbols),
        pool.len()
    )
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

pub fn print_password(password: &str) {
    println!("{}", style(password).bold().cyan());
}

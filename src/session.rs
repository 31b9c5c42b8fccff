//! Caller-held generation state.
//!
//! A session owns the current options and the password derived from them.
//! Every setter that changes an option re-runs the generator, so the
//! password always matches the options on display.

use rand::rngs::ThreadRng;
use rand::Rng;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::generator::{self, clamp_length, GenerationOptions};
use crate::ui::Clipboard;

pub struct Session<R: Rng = ThreadRng> {
    options: GenerationOptions,
    password: Zeroizing<String>,
    revision: u64,
    rng: R,
}

impl Session<ThreadRng> {
    pub fn new(options: GenerationOptions) -> Self {
        Self::with_rng(options, rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    /// Start a session with an explicit RNG and generate the first password.
    pub fn with_rng(options: GenerationOptions, rng: R) -> Self {
        let mut session = Self {
            options: GenerationOptions::new(
                options.length,
                options.include_digits,
                options.include_symbols,
            ),
            password: Zeroizing::new(String::new()),
            revision: 0,
            rng,
        };
        session.regenerate();
        session
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Number of passwords generated so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn regenerate(&mut self) {
        self.password = Zeroizing::new(generator::generate_with(&self.options, &mut self.rng));
        self.revision += 1;
        log::debug!(
            "revision {}: regenerated with length {}",
            self.revision,
            self.options.length
        );
    }

    /// Set the length (clamped). Returns whether a new password was generated.
    pub fn set_length(&mut self, length: usize) -> bool {
        let length = clamp_length(length);
        self.update(GenerationOptions {
            length,
            ..self.options
        })
    }

    pub fn set_include_digits(&mut self, include: bool) -> bool {
        self.update(GenerationOptions {
            include_digits: include,
            ..self.options
        })
    }

    pub fn set_include_symbols(&mut self, include: bool) -> bool {
        self.update(GenerationOptions {
            include_symbols: include,
            ..self.options
        })
    }

    pub fn toggle_digits(&mut self) {
        self.set_include_digits(!self.options.include_digits);
    }

    pub fn toggle_symbols(&mut self) {
        self.set_include_symbols(!self.options.include_symbols);
    }

    /// Write the current password to `clipboard`.
    pub fn copy_to<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> Result<()> {
        clipboard.write_text(self.password())
    }

    fn update(&mut self, options: GenerationOptions) -> bool {
        if options == self.options {
            return false;
        }
        self.options = options;
        self.regenerate();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{MAX_LENGTH, MIN_LENGTH};
    use crate::ui::tests::MemoryClipboard;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(options: GenerationOptions) -> Session<StdRng> {
        Session::with_rng(options, StdRng::seed_from_u64(99))
    }

    #[test]
    fn test_generates_on_start() {
        let s = session(GenerationOptions::default());
        assert_eq!(s.revision(), 1);
        assert_eq!(s.password().len(), 8);
        assert!(s.password().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_start_clamps_length() {
        let s = session(GenerationOptions {
            length: 2,
            include_digits: false,
            include_symbols: false,
        });
        assert_eq!(s.options().length, MIN_LENGTH);
        assert_eq!(s.password().len(), MIN_LENGTH);
    }

    #[test]
    fn test_length_change_recomputes() {
        let mut s = session(GenerationOptions::default());
        assert!(s.set_length(20));
        assert_eq!(s.revision(), 2);
        assert_eq!(s.password().len(), 20);
    }

    #[test]
    fn test_same_length_does_not_recompute() {
        let mut s = session(GenerationOptions::default());
        let before = s.password().to_string();
        assert!(!s.set_length(8));
        assert_eq!(s.revision(), 1);
        assert_eq!(s.password(), before);
    }

    #[test]
    fn test_length_is_clamped() {
        let mut s = session(GenerationOptions::default());
        s.set_length(500);
        assert_eq!(s.options().length, MAX_LENGTH);
        assert_eq!(s.password().len(), MAX_LENGTH);

        s.set_length(1);
        assert_eq!(s.password().len(), MIN_LENGTH);
    }

    #[test]
    fn test_clamped_noop_does_not_recompute() {
        let mut s = session(GenerationOptions::new(MAX_LENGTH, false, false));
        assert!(!s.set_length(MAX_LENGTH + 50));
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn test_toggles_recompute() {
        let mut s = session(GenerationOptions::default());
        s.toggle_digits();
        assert!(s.options().include_digits);
        s.toggle_symbols();
        assert!(s.options().include_symbols);
        assert_eq!(s.revision(), 3);

        s.toggle_digits();
        assert!(!s.options().include_digits);
        assert_eq!(s.revision(), 4);
    }

    #[test]
    fn test_set_flag_noop() {
        let mut s = session(GenerationOptions::default());
        assert!(!s.set_include_digits(false));
        assert!(!s.set_include_symbols(false));
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn test_regenerate_always_recomputes() {
        let mut s = session(GenerationOptions::default());
        s.regenerate();
        s.regenerate();
        assert_eq!(s.revision(), 3);
    }

    #[test]
    fn test_copy_writes_current_password() {
        let mut s = session(GenerationOptions::new(16, true, true));
        let mut cb = MemoryClipboard::default();
        s.copy_to(&mut cb).unwrap();
        assert_eq!(cb.contents, s.password());

        s.regenerate();
        s.copy_to(&mut cb).unwrap();
        assert_eq!(cb.contents, s.password());
        assert_eq!(cb.writes, 2);
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let s = session(GenerationOptions::default());
        let mut cb = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(s.copy_to(&mut cb).is_err());
        assert_eq!(s.password().len(), 8);
    }
}

//! Menu-driven session: change an option, get a fresh password.

use std::fmt;

use console::style;
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select};
use zeroize::Zeroizing;

use crate::cli::OptionArgs;
use crate::error::Result;
use crate::generator::{MAX_LENGTH, MIN_LENGTH};
use crate::session::Session;
use crate::ui::{self, Clipboard, SystemClipboard};

/// Seconds a copied password stays on the clipboard.
const CLEAR_AFTER_SECS: u64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Regenerate,
    ToggleDigits,
    ToggleSymbols,
    SetLength,
    Copy,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Regenerate,
        Action::ToggleDigits,
        Action::ToggleSymbols,
        Action::SetLength,
        Action::Copy,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Regenerate => "Regenerate",
            Action::ToggleDigits => "Toggle numbers",
            Action::ToggleSymbols => "Toggle special characters",
            Action::SetLength => "Set length",
            Action::Copy => "Copy to clipboard",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

pub fn run(args: OptionArgs) -> Result<()> {
    let mut last_copied: Option<Zeroizing<String>> = None;
    let result = menu_loop(args, &mut last_copied);

    // The timer thread dies with the process, so clear here as well.
    if let Some(text) = last_copied {
        let cleared =
            SystemClipboard::new().and_then(|mut cb| clear_on_exit(&mut cb, Some(text.as_str())));
        match cleared {
            Ok(true) => println!("Clipboard cleared."),
            Ok(false) => log::debug!("clipboard changed since the last copy, leaving it alone"),
            Err(e) => eprintln!("{} Failed to clear clipboard: {}", style("warning:").yellow(), e),
        }
    }

    result
}

/// Clear `last_copied` from the clipboard unless the user copied something
/// else since.
fn clear_on_exit<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    last_copied: Option<&str>,
) -> Result<bool> {
    match last_copied {
        Some(text) => ui::clear_if_unchanged(clipboard, text),
        None => Ok(false),
    }
}

fn menu_loop(args: OptionArgs, last_copied: &mut Option<Zeroizing<String>>) -> Result<()> {
    let mut session = Session::new(args.to_options());

    loop {
        println!();
        ui::print_password(session.password());
        println!(
            "{} {}",
            ui::describe_options(session.options()),
            style(format!("#{}", session.revision())).dim()
        );

        let action = match Select::new("Action:", Action::ALL.to_vec()).prompt() {
            Ok(a) => a,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Action::Quit
            }
            Err(e) => return Err(e.into()),
        };

        match action {
            Action::Regenerate => session.regenerate(),
            Action::ToggleDigits => session.toggle_digits(),
            Action::ToggleSymbols => session.toggle_symbols(),
            Action::SetLength => {
                if let Some(length) = prompt_length(session.options().length)? {
                    session.set_length(length);
                }
            }
            Action::Copy => {
                let copied = SystemClipboard::new().and_then(|mut cb| session.copy_to(&mut cb));
                if ui::report_copy(copied, session.password().len()) {
                    println!(
                        "Copied. Clipboard clears in {} seconds or on quit.",
                        CLEAR_AFTER_SECS
                    );
                    ui::spawn_clear_after(session.password().to_string(), CLEAR_AFTER_SECS);
                    *last_copied = Some(Zeroizing::new(session.password().to_string()));
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Ask for a new length. `None` means the user backed out.
fn prompt_length(current: usize) -> Result<Option<usize>> {
    let answer = CustomType::<usize>::new("Length:")
        .with_default(current)
        .with_help_message(&format!("between {} and {}", MIN_LENGTH, MAX_LENGTH))
        .with_error_message("Please type a whole number")
        .with_validator(|v: &usize| Ok(check_length(*v)))
        .prompt();

    match answer {
        Ok(n) => Ok(Some(n)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn check_length(length: usize) -> Validation {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Validation::Valid
    } else {
        Validation::Invalid(
            format!("Length must be between {} and {}", MIN_LENGTH, MAX_LENGTH).into(),
        )
    }
}

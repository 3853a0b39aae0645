//! Interactive prompts with a piped-stdin fallback.
//!
//! When stdin is not a terminal every prompt reads one line instead,
//! so the binary stays scriptable and testable. Hidden input and
//! confirmation loops only happen on a real terminal.

use std::io::{self, BufRead, IsTerminal};

use ::age::secrecy::SecretString;
use dialoguer::{Confirm, Password};
use zeroize::Zeroizing;

use crate::error::{KeyringError, Result};

/// Prompt for a passphrase with hidden input.
pub fn passphrase(label: &str) -> Result<SecretString> {
    let value = if io::stdin().is_terminal() {
        Password::new().with_prompt(label).interact()?
    } else {
        read_line()?
    };
    Ok(SecretString::from(value))
}

/// Passphrase prompt for the keyring's bounded unlock loop.
///
/// Repeat attempts name the attempt number so the user knows a retry
/// is happening.
pub fn unlock() -> impl FnMut(u32) -> Result<SecretString> {
    |attempt| {
        if attempt == 1 {
            passphrase("Passphrase")
        } else {
            passphrase(&format!("Passphrase (attempt {})", attempt))
        }
    }
}

/// Prompt for a new secret value, entered twice.
///
/// # Errors
///
/// Returns `KeyringError::PassphraseMismatch` when the two entries
/// differ.
pub fn new_value(path: &str) -> Result<Zeroizing<Vec<u8>>> {
    let first = if io::stdin().is_terminal() {
        Zeroizing::new(
            Password::new()
                .with_prompt(format!("Value for {}", path))
                .interact()?,
        )
    } else {
        Zeroizing::new(read_line()?)
    };
    let second = if io::stdin().is_terminal() {
        Zeroizing::new(Password::new().with_prompt("Repeat value").interact()?)
    } else {
        Zeroizing::new(read_line()?)
    };

    if *first != *second {
        return Err(KeyringError::PassphraseMismatch.into());
    }
    Ok(Zeroizing::new(first.as_bytes().to_vec()))
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> Result<bool> {
    if io::stdin().is_terminal() {
        Ok(Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()?)
    } else {
        let answer = read_line()?;
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

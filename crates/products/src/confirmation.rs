//! Confirmation providers for price decreases.

use std::io::{BufRead, Write};

/// Prompt shown before a price decrease is applied.
pub const PRICE_DECREASE_PROMPT: &str = "Цена снижается. Подтвердите действие (y/n):";

/// Answers a yes/no question synchronously.
///
/// `Product::set_price` asks exactly once per price decrease and blocks until an
/// answer is returned.
pub trait PriceConfirmation {
    fn ask_yes_no(&mut self, prompt: &str) -> bool;
}

impl<F> PriceConfirmation for F
where
    F: FnMut(&str) -> bool,
{
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Interactive provider: writes the prompt, reads one line.
///
/// Only a line reading exactly `y` or `Y` counts as yes; the line ending is the only
/// thing stripped. Read failures and end of input count as no.
#[derive(Debug)]
pub struct PromptConfirmation<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> PriceConfirmation for PromptConfirmation<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        if let Err(e) = writeln!(self.output, "{prompt}").and_then(|_| self.output.flush()) {
            tracing::warn!("failed to write confirmation prompt: {e}");
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => answer
                .trim_end_matches(['\n', '\r'])
                .eq_ignore_ascii_case("y"),
            Err(e) => {
                tracing::warn!("failed to read confirmation answer: {e}");
                false
            }
        }
    }
}

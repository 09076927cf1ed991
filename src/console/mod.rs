//! Menu-driven console front end.
//!
//! Offers the four pair-operand operations from a numbered menu, prompting
//! until it gets valid input. Generic over its input and output so whole
//! sessions can be replayed in tests.

mod input;

pub use input::WordReader;

use crate::arithmetic::Operation;
use crate::config::ConsoleConfig;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A selection from the numbered menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Operation(Operation),
    Exit,
}

impl MenuChoice {
    /// Number of the exit entry, which follows the operations.
    pub const EXIT: i64 = Operation::ALL.len() as i64 + 1;

    /// Map a menu number (`1..=5`) to a choice.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            Self::EXIT => Some(Self::Exit),
            n if n >= 1 => usize::try_from(n - 1)
                .ok()
                .and_then(|i| Operation::ALL.get(i))
                .map(|op| Self::Operation(*op)),
            _ => None,
        }
    }
}

/// The console calculator session.
pub struct Console<R, W> {
    input: WordReader<R>,
    out: W,
    decimals: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, config: &ConsoleConfig) -> Self {
        Self {
            input: WordReader::new(input),
            out,
            decimals: config.decimals,
        }
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_header()?;

        loop {
            self.print_menu()?;
            let operation = match self.read_choice()? {
                Some(MenuChoice::Operation(operation)) => operation,
                Some(MenuChoice::Exit) => {
                    writeln!(
                        self.out,
                        "\nThank you for using the Simple Calculator. Goodbye!"
                    )?;
                    break;
                }
                None => break,
            };

            let Some(a) = self.read_number("Enter the first number: ")? else {
                break;
            };
            let Some(b) = self.read_number("Enter the second number: ")? else {
                break;
            };

            match operation.apply(a, b) {
                Ok(result) => {
                    let d = self.decimals;
                    let op = operation.symbol();
                    writeln!(self.out, "Result: {a:.d$} {op} {b:.d$} = {result:.d$}")?;
                }
                Err(e) => {
                    debug!(?operation, a, b, error = %e, "operation failed");
                    writeln!(self.out, "Error: {e}.")?;
                }
            }

            writeln!(self.out, "\nPress Enter to continue...")?;
            self.out.flush()?;
            if !self.input.wait_for_line()? {
                break;
            }
            writeln!(self.out)?;
        }

        self.out.flush()
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "======================================")?;
        writeln!(self.out, "        Welcome to Simple Calculator   ")?;
        writeln!(self.out, "======================================\n")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "Select an operation to perform:")?;
        writeln!(self.out, "--------------------------------")?;
        for (i, operation) in Operation::ALL.iter().enumerate() {
            writeln!(
                self.out,
                "{}. {} ({})",
                i + 1,
                operation.name(),
                operation.symbol()
            )?;
        }
        writeln!(self.out, "{}. Exit", MenuChoice::EXIT)?;
        write!(self.out, "Enter your choice (1-{}): ", MenuChoice::EXIT)?;
        self.out.flush()
    }

    /// Prompt until a valid menu number arrives. `None` at end of input.
    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        while let Some(word) = self.input.next_word()? {
            let message = match word.parse::<i64>() {
                Ok(number) => match MenuChoice::from_number(number) {
                    Some(choice) => return Ok(Some(choice)),
                    None => "Invalid choice!",
                },
                Err(_) => "Invalid input!",
            };
            write!(
                self.out,
                "{message} Please enter a number between 1 and {}: ",
                MenuChoice::EXIT
            )?;
            self.out.flush()?;
        }
        Ok(None)
    }

    /// Prompt until a finite number arrives. `None` at end of input.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        while let Some(word) = self.input.next_word()? {
            match word.parse::<f64>() {
                Ok(number) if number.is_finite() => return Ok(Some(number)),
                _ => {
                    write!(self.out, "Invalid input! Please enter a valid number: ")?;
                    self.out.flush()?;
                }
            }
        }
        Ok(None)
    }
}

//! Interactive stdin prompts for the demo.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended while reading {0}")]
    Eof(&'static str),
    #[error("lower bound {lower} must be below upper bound {upper}")]
    EmptyRange { lower: i32, upper: i32 },
    #[error("failed to read from stdin")]
    Io(#[from] io::Error),
}

/// Where the values to sort come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Read the values from stdin.
    Custom,
    /// Generate uniformly distributed values.
    Random,
}

pub struct Prompter<R> {
    reader: R,
    // Tokens of a partially consumed line, for whitespace separated lists.
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn array_size(&mut self) -> Result<usize, InputError> {
        prompt("Please enter the size of the array: ")?;
        loop {
            match self.line("the array size")?.parse::<usize>() {
                Ok(size) if size > 0 => return Ok(size),
                _ => {
                    println!("Invalid input. Please enter a positive integer.");
                    prompt("Enter the array size: ")?;
                }
            }
        }
    }

    /// "C" (any case) selects custom input, everything else random generation.
    pub fn mode(&mut self) -> Result<Mode, InputError> {
        prompt(
            "Would you like to enter a custom array or generate a random one? \
             (Enter 'C' for custom, 'R' for random): ",
        )?;
        let choice = self.line("the input mode")?;

        Ok(if choice.eq_ignore_ascii_case("c") {
            Mode::Custom
        } else {
            Mode::Random
        })
    }

    pub fn custom_array(&mut self, len: usize) -> Result<Vec<i32>, InputError> {
        println!("Please enter {len} integers (separated by spaces or newlines):");

        let mut values = Vec::with_capacity(len);
        while values.len() < len {
            let token = self.token("the custom array")?;
            match token.parse::<i32>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    debug!("rejected token {token:?}: {err}");
                    println!("Invalid input '{token}'. Please enter an integer.");
                }
            }
        }

        Ok(values)
    }

    /// Reads one integer, falling back to `default` on anything unparsable.
    pub fn integer_or(&mut self, message: &str, default: i32) -> Result<i32, InputError> {
        prompt(message)?;
        match self.line("an integer")?.parse::<i32>() {
            Ok(value) => Ok(value),
            Err(_) => {
                println!("Invalid input. Using default value: {default}");
                Ok(default)
            }
        }
    }

    fn line(&mut self, what: &'static str) -> Result<String, InputError> {
        self.pending.clear();

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Eof(what));
        }

        Ok(line.trim().to_owned())
    }

    fn token(&mut self, what: &'static str) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Eof(what));
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn prompt(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(message.as_bytes())?;
    stdout.flush()
}

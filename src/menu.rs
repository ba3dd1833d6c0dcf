//! Interactive menu.
//!
//! Reads choices line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so the same loop serves stdin/stdout and tests.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use secrecy::{ExposeSecret, SecretBox};

use crate::blacklist::CommonPasswords;
use crate::evaluator::evaluate_password_bytes;
use crate::generator::{MAX_GENERATED_LENGTH, generate_password};

const BANNER: &str = "---------- Password Checker CLI ----------";
const UNKNOWN_CHOICE: &str = "Unknown Choice!";

/// Parses a numbered menu entry; anything else, including non-UTF-8 input,
/// is `None`.
fn parse_choice(input: &[u8]) -> Option<u32> {
    std::str::from_utf8(input).ok()?.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Generate,
    Rate,
    Exit,
}

impl MenuChoice {
    fn parse(input: &[u8]) -> Option<Self> {
        match parse_choice(input)? {
            1 => Some(MenuChoice::Generate),
            2 => Some(MenuChoice::Rate),
            3 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerateChoice {
    RandomLength,
    SpecificLength,
}

impl GenerateChoice {
    fn parse(input: &[u8]) -> Option<Self> {
        match parse_choice(input)? {
            1 => Some(GenerateChoice::RandomLength),
            2 => Some(GenerateChoice::SpecificLength),
            _ => None,
        }
    }
}

pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    common: Option<&'a dyn CommonPasswords>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(input: R, output: W, common: Option<&'a dyn CommonPasswords>) -> Self {
        Self {
            input,
            output,
            common,
        }
    }

    /// Runs the menu until the user picks "Exit" or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Generate) => self.generate()?,
                Some(MenuChoice::Rate) => self.rate()?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "{}", UNKNOWN_CHOICE)?,
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("menu closed");
        Ok(())
    }

    /// Consumes the menu, handing back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", BANNER)?;
        writeln!(self.output, "1. Generate Strong Password")?;
        writeln!(self.output, "2. Check If A Password Is Strong")?;
        writeln!(self.output, "3. Exit from the Program")?;
        self.prompt("Enter your choice: ")
    }

    fn generate(&mut self) -> io::Result<()> {
        writeln!(self.output, "1. Create Random Strong Password")?;
        writeln!(self.output, "2. Create a Specific Length Password")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        let length = match GenerateChoice::parse(&line) {
            Some(GenerateChoice::RandomLength) => None,
            Some(GenerateChoice::SpecificLength) => {
                self.prompt("Enter the Password Length: ")?;
                let Some(line) = self.read_line()? else {
                    return Ok(());
                };
                match self.parse_length(&line)? {
                    Some(n) => Some(n),
                    None => return Ok(()),
                }
            }
            None => return writeln!(self.output, "{}", UNKNOWN_CHOICE),
        };

        match generate_password(length) {
            Ok(password) => writeln!(
                self.output,
                "Your New Password is: {}",
                password.expose_secret()
            ),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    /// Parses a typed length, reporting input that is not a usable number.
    fn parse_length(&mut self, line: &[u8]) -> io::Result<Option<usize>> {
        let text = String::from_utf8_lossy(line);
        let text = text.trim();
        match text.parse::<usize>() {
            Ok(n) => Ok(Some(n)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                writeln!(
                    self.output,
                    "Invalid password length {}: must be at most {}",
                    text, MAX_GENERATED_LENGTH
                )?;
                Ok(None)
            }
            Err(_) => {
                writeln!(
                    self.output,
                    "Invalid password length: {:?} is not a positive number",
                    text
                )?;
                Ok(None)
            }
        }
    }

    fn rate(&mut self) -> io::Result<()> {
        self.prompt("Enter the Password: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let password = SecretBox::new(line.into_boxed_slice());

        let evaluation = evaluate_password_bytes(&password, self.common);
        writeln!(self.output, "Password Rating: {}", evaluation.score())?;

        self.prompt("Do you want the feedback of your password? (Enter 1 to view it): ")?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        if parse_choice(&line) == Some(1) {
            for feedback in evaluation.feedback() {
                writeln!(self.output, "{}", feedback)?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Reads one line as raw bytes without its terminator; `None` at end of
    /// input. The bytes need not be UTF-8.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with(b"\n") {
            line.pop();
        }
        if line.ends_with(b"\r") {
            line.pop();
        }
        Ok(Some(line))
    }
}

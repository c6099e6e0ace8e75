use std::io::{self, BufRead, Write};

use crate::tourist::{self, RecordError, RecordResult, Tourist};

/// Reads tourists field by field, asking again until each field validates.
///
/// Prompts and validation messages go to `output`. A rejected line is simply
/// discarded; the next line is treated as a fresh answer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads the tourist numbered `index` (1-based in the prompt).
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn read_tourist(&mut self, index: usize) -> io::Result<Option<Tourist>> {
        writeln!(self.output, "\nTourist {}:", index)?;
        let surname = match self.ask("Surname: ", tourist::parse_surname)? {
            Some(surname) => surname,
            None => return Ok(None),
        };
        let passport_code = match self.ask(
            "Passport code (whole number > 0): ",
            tourist::parse_passport_code,
        )? {
            Some(code) => code,
            None => return Ok(None),
        };
        let days = match self.ask("Days (whole number >= 0): ", tourist::parse_days)? {
            Some(days) => days,
            None => return Ok(None),
        };
        Ok(Some(Tourist {
            surname,
            passport_code,
            days,
        }))
    }

    /// Reads up to `count` tourists, stopping early at end of input.
    pub fn read_tourists(&mut self, count: usize) -> io::Result<Vec<Tourist>> {
        let mut tourists = Vec::with_capacity(count);
        for index in 1..=count {
            match self.read_tourist(index)? {
                Some(tourist) => tourists.push(tourist),
                None => break,
            }
        }
        Ok(tourists)
    }

    /// Consumes the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> RecordResult<T>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let parsed = String::from_utf8(buf)
                .map_err(|_| RecordError::InvalidText)
                .and_then(|line| parse(&line));
            match parsed {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "Error: {}", err)?,
            }
        }
    }
}

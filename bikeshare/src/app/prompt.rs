use std::io::{BufRead, Write};

use bikeshare_core::model::BikeshareError;

/// shown in place of the original prompt after an unusable answer.
pub const INVALID_SELECTION: &str = "Invalid selection. Please try again!\n";

/// asks questions on an output stream and reads answers from an input stream,
/// repeating each question until the answer is acceptable.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Prompter<R, W> {
        Prompter { input, output }
    }

    /// stream for non-interactive output such as report text
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// prompts until the answer parses as an integer in `[low, high]`.
    pub fn numeric_in_range(
        &mut self,
        prompt: &str,
        low: i64,
        high: i64,
    ) -> Result<i64, BikeshareError> {
        let mut current = prompt;
        loop {
            let response = self.read_response(current)?;
            match response.trim().parse::<i64>() {
                Ok(value) if low <= value && value <= high => return Ok(value),
                _ => {
                    log::debug!("rejected answer {:?}, expected [{low}, {high}]", response.trim());
                    current = INVALID_SELECTION;
                }
            }
        }
    }

    /// prompts until the trimmed, lower-cased answer is one of `allowed`, and
    /// returns it in that normalized form.
    pub fn enumerated_text(
        &mut self,
        prompt: &str,
        allowed: &[&str],
    ) -> Result<String, BikeshareError> {
        let options: Vec<String> = allowed.iter().map(|o| o.trim().to_lowercase()).collect();
        let mut current = prompt;
        loop {
            let response = self.read_response(current)?;
            let normalized = response.trim().to_lowercase();
            if options.contains(&normalized) {
                return Ok(normalized);
            }
            log::debug!("rejected answer {normalized:?}, expected one of {options:?}");
            current = INVALID_SELECTION;
        }
    }

    /// yes/no question. true for "y".
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, BikeshareError> {
        let answer = self.enumerated_text(prompt, &["y", "n"])?;
        Ok(answer == "y")
    }

    fn read_response(&mut self, prompt: &str) -> Result<String, BikeshareError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        // bytes that are not utf-8 become replacement characters and fail validation
        let mut line = Vec::new();
        let read = self.input.read_until(b'\n', &mut line)?;
        if read == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

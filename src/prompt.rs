use std::io::{BufRead, Write};

use log::debug;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Line-based prompting
// ---------------------------------------------------------------------------

/// Asks questions on `output` and reads answers from `input`, one per line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Where reports and messages are written.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write `prompt` and return the next line, trimmed and lower-cased.
    pub fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and simply fail to match.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_lowercase())
    }

    /// Ask until the answer is one of `allowed` (case-insensitive). `retry`
    /// replaces `prompt` after an invalid answer.
    pub fn ask_choice(&mut self, prompt: &str, retry: &str, allowed: &[&str]) -> Result<String> {
        let mut answer = self.read_answer(prompt)?;
        while !allowed.contains(&answer.as_str()) {
            debug!("rejected answer '{answer}'");
            answer = self.read_answer(retry)?;
        }
        Ok(answer)
    }

    /// True exactly when the answer is `yes`.
    pub fn ask_yes(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.read_answer(prompt)? == "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reprompts_until_a_member_is_entered() {
        let mut p = prompter("boston\n\nChicago\n");
        let city = p
            .ask_choice("City: ", "Try again: ", &["chicago", "washington"])
            .unwrap();
        assert_eq!(city, "chicago");

        let shown = String::from_utf8(p.output().clone()).unwrap();
        assert_eq!(shown, "City: Try again: Try again: ");
    }

    #[test]
    fn answers_are_trimmed_and_lowercased() {
        let mut p = prompter("  New York City \r\n");
        assert_eq!(p.read_answer("> ").unwrap(), "new york city");
    }

    #[test]
    fn only_yes_counts_as_yes() {
        let mut p = prompter("YES\ny\nno\n");
        assert!(p.ask_yes("? ").unwrap());
        assert!(!p.ask_yes("? ").unwrap());
        assert!(!p.ask_yes("? ").unwrap());
    }

    #[test]
    fn invalid_utf8_is_just_another_wrong_answer() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(b"washington\n");
        let mut p = Prompter::new(Cursor::new(input), Vec::new());
        let city = p
            .ask_choice("City: ", "Try again: ", &["chicago", "washington"])
            .unwrap();
        assert_eq!(city, "washington");
        assert_eq!(String::from_utf8(p.output().clone()).unwrap(), "City: Try again: ");
    }

    #[test]
    fn closed_input_stops_the_retry_loop() {
        let mut p = prompter("nope\n");
        let err = p.ask_choice("> ", "> ", &["all"]).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }
}

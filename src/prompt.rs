use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::errors::ConsoleError;

/// Line-oriented question/answer I/O for the console.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Prints `label` and reads one trimmed line. A closed input is `Eof`.
    pub fn ask(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Eof);
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_parsed<T: FromStr>(
        &mut self,
        label: &str,
        field: &'static str,
    ) -> Result<T, ConsoleError> {
        let raw = self.ask(label)?;
        raw.parse()
            .map_err(|_| ConsoleError::InvalidNumber { field, value: raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn should_trim_answers() {
        let mut prompt = Prompt::new(Cursor::new("  Grand \n"), Vec::new());
        assert_eq!(prompt.ask("Enter hotel name: ").unwrap(), "Grand");
        assert_eq!(
            String::from_utf8(prompt.into_output()).unwrap(),
            "Enter hotel name: "
        );
    }

    #[test]
    fn should_fail_fast_on_bad_number() {
        let mut prompt = Prompt::new(Cursor::new("abc\n"), Vec::new());
        let err = prompt
            .ask_parsed::<f64>("Enter hotel price: ", "price")
            .unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "'abc' is not a valid price.");
    }

    #[test]
    fn should_report_eof() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        assert!(matches!(prompt.ask("> "), Err(ConsoleError::Eof)));
    }
}

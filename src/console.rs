use crate::error::FinderError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line based user interaction
pub trait Console {
    /// Show `prompt` and read one line without its line ending
    fn read_line(&mut self, prompt: &str) -> Result<String, FinderError>;

    fn print_line(&mut self, text: &str);
}

/// Console on the process's stdin and stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, FinderError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(FinderError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Console fed from a fixed list of input lines.
///
/// Prompts and printed lines are captured in order, which makes a run
/// reproducible without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything shown so far: prompts followed by the answer read, then
    /// printed lines
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, FinderError> {
        let line = self.input.pop_front().ok_or(FinderError::InputClosed)?;
        self.output.push(format!("{}{}", prompt, line));
        Ok(line)
    }

    fn print_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_records_exchange() {
        let mut console = ScriptedConsole::new(["milk", ""]);
        assert_eq!(console.read_line("Ingredient: ").unwrap(), "milk");
        console.print_line("ok");
        assert_eq!(console.read_line("Ingredient: ").unwrap(), "");
        assert_eq!(console.output(), ["Ingredient: milk", "ok", "Ingredient: "]);
    }

    #[test]
    fn test_scripted_console_end_of_input() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert!(matches!(
            console.read_line("> "),
            Err(FinderError::InputClosed)
        ));
    }
}

use super::SetupError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// The three interaction primitives the wizard relies on. Anything that can
/// answer a question, answer yes/no, and show a message can host the wizard.
pub trait Terminal {
    fn prompt(&mut self, message: &str) -> Result<String, SetupError>;
    fn confirm(&mut self, message: &str) -> Result<bool, SetupError>;
    fn echo(&mut self, message: &str);
}

/// Blocking stdin/stdout terminal.
pub struct StdTerminal;

impl StdTerminal {
    fn read_line(&self) -> Result<String, SetupError> {
        let mut raw = String::new();
        io::stdin()
            .lock()
            .read_line(&mut raw)
            .map_err(SetupError::TerminalRead)?;
        Ok(raw.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Terminal for StdTerminal {
    fn prompt(&mut self, message: &str) -> Result<String, SetupError> {
        println!("{message}");
        print!("> ");
        io::stdout().flush().map_err(SetupError::TerminalRead)?;
        self.read_line()
    }

    fn confirm(&mut self, message: &str) -> Result<bool, SetupError> {
        loop {
            print!("{message} [y/n]: ");
            io::stdout().flush().map_err(SetupError::TerminalRead)?;
            match self.read_line()?.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" | "" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn echo(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Terminal fed from a fixed answer queue. Backs the `CRAWLMON_SETUP_SCRIPT`
/// environment variable and the test suites; every question asked and every
/// message echoed is recorded for inspection.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub confirms: Vec<String>,
    pub echoes: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            confirms: Vec::new(),
            echoes: Vec::new(),
        }
    }

    /// Parses a semicolon-separated answer script, e.g. `"y;10;n;n"`.
    pub fn from_script(raw: &str) -> Self {
        Self::new(raw.split(';').map(str::trim))
    }

    fn next_answer(&mut self) -> Result<String, SetupError> {
        self.answers.pop_front().ok_or(SetupError::ScriptExhausted)
    }
}

impl Terminal for ScriptedTerminal {
    fn prompt(&mut self, message: &str) -> Result<String, SetupError> {
        self.prompts.push(message.to_string());
        self.next_answer()
    }

    fn confirm(&mut self, message: &str) -> Result<bool, SetupError> {
        self.confirms.push(message.to_string());
        let answer = self.next_answer()?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "true"
        ))
    }

    fn echo(&mut self, message: &str) {
        self.echoes.push(message.to_string());
    }
}

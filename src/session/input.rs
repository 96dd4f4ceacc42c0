use rustyline::{DefaultEditor, error::ReadlineError};

/// Source of one line of user input per prompt.
pub trait Prompter {
    fn prompt(&mut self, message: &str) -> Result<String, ReadlineError>;
}

impl Prompter for DefaultEditor {
    fn prompt(&mut self, message: &str) -> Result<String, ReadlineError> {
        self.readline(message)
    }
}

/// blocking input port for human turns.
/// production reads the terminal; tests inject scripted answers.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> String;
}

/// terminal-backed prompt
pub struct Console;

impl Prompt for Console {
    fn ask(&mut self, question: &str) -> String {
        Input::new()
            .with_prompt(question)
            .allow_empty(true)
            .report(false)
            .interact()
            .unwrap()
    }
}

use dialoguer::Input;

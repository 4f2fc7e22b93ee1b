/// prompted turn policy. the claim is whatever the person answers,
/// whether or not it matches the card; honesty is enforced upstream.
pub struct Human {
    prompt: Box<dyn Prompt>,
}

impl Human {
    pub fn new(prompt: Box<dyn Prompt>) -> Self {
        Self { prompt }
    }
}

impl Claim for Human {
    /// asks until the answer is exactly "y" or "n".
    /// anything else, padding included, reprompts, forever if need be.
    fn claims(&mut self, barrel: Barrel, _: bool) -> bool {
        loop {
            let question = format!("Strike {}? (y/n)", barrel);
            match self.prompt.ask(&question).as_str() {
                "y" => return true,
                "n" => return false,
                _ => continue,
            }
        }
    }
}

impl std::fmt::Debug for Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use super::player::Claim;
use super::prompt::Prompt;
use crate::cards::Barrel;

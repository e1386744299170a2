//! The structured request extracted from the command line.

use super::Cli;

/// What the user asked for, independent of how it was spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// The explicit instruction if one was given, else the words joined by spaces.
    pub prompt: String,
    pub quiet: bool,
    pub verbose: bool,
}

impl From<&Cli> for InvocationRequest {
    fn from(cli: &Cli) -> Self {
        let prompt = match &cli.instruction {
            Some(instruction) => instruction.clone(),
            None => cli.words.join(" "),
        };
        Self {
            prompt,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

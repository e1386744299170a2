//! Command-line interface definition and dispatch for tellm.
//!
//! Uses [`clap`] for argument definitions and help text. The grammar is
//! forgiving: recognized flags may appear anywhere, a value flag with
//! nothing after it is ignored, and every unrecognized token (including
//! ones that look like flags) is kept as a prompt word. [`normalize`] turns
//! raw tokens into a form clap parses strictly.

mod request;

pub use request::InvocationRequest;

use clap::{Arg, Command, CommandFactory, Parser};

use crate::compose::Composition;
use crate::config::Config;
use crate::constants::{APP_NAME, USAGE};
use crate::error::TellmError;
use crate::output::StatusSink;
use crate::pipeline::{self, PipelineSettings};
use crate::provider::{self, Provider};

/// Top-level CLI structure for tellm.
#[derive(Parser, Debug)]
#[command(
    name = "tellm",
    version,
    about = "Ask a local language model, optionally about piped content",
    after_help = USAGE,
    args_override_self = true
)]
pub struct Cli {
    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,
    /// Show extra progress info
    #[arg(short, long)]
    pub verbose: bool,
    /// Instruction to apply to piped input (replaces the prompt words)
    #[arg(short, long, value_name = "TEXT")]
    pub instruction: Option<String>,
    /// Model to use (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,
    /// Provider to use (ollama, openai-compatible)
    #[arg(long)]
    pub provider: Option<String>,
    /// Maximum characters of piped content per summarization request
    #[arg(long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,
    /// The prompt to send to the model
    pub words: Vec<String>,
}

/// Parses the process arguments into a [`Cli`] struct.
pub fn parse() -> Result<Cli, clap::Error> {
    let tokens: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    parse_tokens(&tokens)
}

/// Parses tokens (without the program name) into a [`Cli`] struct.
pub fn parse_tokens(tokens: &[String]) -> Result<Cli, clap::Error> {
    let mut cmd = Cli::command();
    cmd.build();
    Cli::try_parse_from(normalize(&cmd, tokens))
}

/// A recognized flag token.
enum Flag<'a> {
    /// One or more boolean flags (`-q`, `--verbose`, `-qv`).
    Switches(Vec<&'a str>),
    /// A flag that takes a value, possibly attached with `=`.
    Valued { long: &'a str, value: Option<&'a str> },
}

/// Rewrites raw tokens as `[program, --flag[=value]..., --, words...]`.
///
/// A value flag consumes exactly the next token, whatever it looks like.
/// A bare `--` ends flag recognition.
pub fn normalize(cmd: &Command, tokens: &[String]) -> Vec<String> {
    let mut flags = Vec::new();
    let mut words = Vec::new();

    let mut tokens = tokens.iter();
    while let Some(token) = tokens.next() {
        if token == "--" {
            words.extend(tokens.by_ref().cloned());
            break;
        }
        match recognize(cmd, token) {
            Some(Flag::Switches(longs)) => {
                flags.extend(longs.into_iter().map(|long| format!("--{long}")));
            }
            Some(Flag::Valued {
                long,
                value: Some(value),
            }) => flags.push(format!("--{long}={value}")),
            Some(Flag::Valued { long, value: None }) => match tokens.next() {
                Some(value) => flags.push(format!("--{long}={value}")),
                None => tracing::debug!(flag = long, "ignoring flag without a value"),
            },
            None => words.push(token.clone()),
        }
    }

    let mut normalized = Vec::with_capacity(flags.len() + words.len() + 2);
    normalized.push(APP_NAME.to_string());
    normalized.extend(flags);
    normalized.push("--".to_string());
    normalized.extend(words);
    normalized
}

fn recognize<'a>(cmd: &'a Command, token: &'a str) -> Option<Flag<'a>> {
    if let Some(rest) = token.strip_prefix("--") {
        let (name, value) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };
        let arg = cmd.get_arguments().find(|a| a.get_long() == Some(name))?;
        let long = arg.get_long()?;
        return if takes_value(arg) {
            Some(Flag::Valued { long, value })
        } else if value.is_none() {
            Some(Flag::Switches(vec![long]))
        } else {
            None
        };
    }

    let shorts = token.strip_prefix('-')?;
    if shorts.is_empty() {
        return None;
    }
    let args: Vec<&Arg> = shorts
        .chars()
        .map(|c| cmd.get_arguments().find(|a| a.get_short() == Some(c)))
        .collect::<Option<_>>()?;

    match args.as_slice() {
        [arg] if takes_value(arg) => Some(Flag::Valued {
            long: arg.get_long()?,
            value: None,
        }),
        // Value flags are only recognized on their own, not inside a cluster.
        _ if args.iter().any(|arg| takes_value(arg)) => None,
        _ => args
            .iter()
            .copied()
            .map(Arg::get_long)
            .collect::<Option<Vec<_>>>()
            .map(Flag::Switches),
    }
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_action().takes_values()
}

/// Runs one invocation and returns the text for standard output.
///
/// `payload` is the piped standard input, `None` for a terminal. The usage
/// check is made before any configuration or network access.
pub async fn run(
    cli: Cli,
    payload: Option<String>,
    status: &mut dyn StatusSink,
) -> Result<String, TellmError> {
    let request = InvocationRequest::from(&cli);
    let plan = Composition::plan(&request.prompt, payload.as_deref())?;

    let mut config = Config::load().map_err(TellmError::Config)?;
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = Some(chunk_size);
    }

    let selection =
        provider::resolve_model(cli.provider.as_deref(), cli.model.as_deref(), &config)
            .map_err(TellmError::Config)?;
    tracing::info!(
        provider = ?selection.provider,
        model = %selection.model,
        base_url = %selection.base_url,
        "resolved model"
    );

    let provider = Provider::new(&selection, config.probe_timeout()).map_err(TellmError::Config)?;
    let settings = PipelineSettings::from_config(&config, request.quiet, request.verbose);
    pipeline::execute(&provider, plan, &settings, status).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingStatus;

    fn parse(tokens: &[&str]) -> Cli {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        parse_tokens(&tokens).unwrap()
    }

    #[test]
    fn words_are_joined_into_the_prompt() {
        let cli = parse(&["why", "is", "the", "sky", "blue"]);
        assert_eq!(cli.words, vec!["why", "is", "the", "sky", "blue"]);
        assert!(!cli.quiet && !cli.verbose);
        assert_eq!(cli.instruction, None);
    }

    #[test]
    fn flags_are_recognized_anywhere() {
        let cli = parse(&["hello", "-q", "there", "--verbose"]);
        assert_eq!(cli.words, vec!["hello", "there"]);
        assert!(cli.quiet);
        assert!(cli.verbose);
    }

    #[test]
    fn clustered_short_flags() {
        let cli = parse(&["-qv", "hi"]);
        assert!(cli.quiet && cli.verbose);
        assert_eq!(cli.words, vec!["hi"]);
    }

    #[test]
    fn instruction_takes_exactly_the_next_token() {
        let cli = parse(&["ignored", "words", "-i", "real instruction"]);
        assert_eq!(cli.instruction.as_deref(), Some("real instruction"));
        assert_eq!(cli.words, vec!["ignored", "words"]);

        let cli = parse(&["--instruction", "--not-a-flag", "-q"]);
        assert_eq!(cli.instruction.as_deref(), Some("--not-a-flag"));
        assert!(cli.quiet);

        let cli = parse(&["--instruction=summarize"]);
        assert_eq!(cli.instruction.as_deref(), Some("summarize"));
    }

    #[test]
    fn dangling_instruction_is_ignored() {
        let cli = parse(&["words", "-i"]);
        assert_eq!(cli.instruction, None);
        assert_eq!(cli.words, vec!["words"]);
    }

    #[test]
    fn unknown_flags_are_prompt_words() {
        let cli = parse(&["explain", "--frobnicate", "-x", "-", "-5", "-qz"]);
        assert_eq!(
            cli.words,
            vec!["explain", "--frobnicate", "-x", "-", "-5", "-qz"]
        );
        assert!(!cli.quiet);
    }

    #[test]
    fn double_dash_ends_flag_recognition() {
        let cli = parse(&["-v", "--", "what", "does", "-q", "do"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert_eq!(cli.words, vec!["what", "does", "-q", "do"]);
    }

    #[test]
    fn repeated_flags_do_not_error() {
        let cli = parse(&["-q", "-q", "-i", "first", "-i", "second"]);
        assert!(cli.quiet);
        assert_eq!(cli.instruction.as_deref(), Some("second"));
    }

    #[test]
    fn overrides_are_parsed() {
        let cli = parse(&["--provider", "ollama", "-m", "qwen2.5", "--chunk-size=2000", "hi"]);
        assert_eq!(cli.provider.as_deref(), Some("ollama"));
        assert_eq!(cli.model.as_deref(), Some("qwen2.5"));
        assert_eq!(cli.chunk_size, Some(2000));
    }

    #[test]
    fn help_and_version_are_reported_not_parsed() {
        let tokens = vec!["--help".to_string()];
        let err = parse_tokens(&tokens).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let tokens = vec!["prompt".to_string(), "-V".to_string()];
        let err = parse_tokens(&tokens).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[tokio::test]
    async fn nothing_to_send_reports_usage() {
        let mut status = RecordingStatus::default();

        let err = run(parse(&[]), None, &mut status).await.unwrap_err();

        assert!(matches!(err, TellmError::Usage));
        assert_eq!(err.exit_code(), 1);
        assert!(status.lines.is_empty());
        status.error(&err);
        assert_eq!(status.lines, vec![USAGE]);
    }

    #[tokio::test]
    async fn flags_alone_with_blank_stdin_report_usage() {
        let mut status = RecordingStatus::default();

        let err = run(parse(&["-q", "-v"]), Some("\n\n".to_string()), &mut status)
            .await
            .unwrap_err();

        assert!(matches!(err, TellmError::Usage));
        assert!(status.lines.is_empty());
    }

    #[test]
    fn bad_chunk_size_is_a_parse_error() {
        let tokens = vec!["--chunk-size".to_string(), "big".to_string()];
        assert!(parse_tokens(&tokens).is_err());
    }
}

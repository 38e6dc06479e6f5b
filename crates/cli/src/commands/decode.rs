use anyhow::Context;
use clap::{Args, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use zutil_dns_codec::{hex, unresolved_pointer, Message};
use zutil_dns_domain::CodecConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Message as hex digits, whitespace allowed
    #[arg(long, conflicts_with = "file")]
    pub hex: Option<String>,

    /// Binary file holding one message
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Where the message bytes come from.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Hex(String),
    File(PathBuf),
    /// Hex text when every byte is a hex digit or whitespace, raw bytes otherwise.
    Stdin,
}

impl DecodeArgs {
    pub fn input(&self) -> Input {
        match (&self.hex, &self.file) {
            (Some(text), _) => Input::Hex(text.clone()),
            (None, Some(path)) => Input::File(path.clone()),
            (None, None) => Input::Stdin,
        }
    }
}

fn looks_like_hex(data: &[u8]) -> bool {
    data.iter().any(|b| b.is_ascii_hexdigit())
        && data
            .iter()
            .all(|b| b.is_ascii_hexdigit() || b.is_ascii_whitespace())
}

pub fn read_input<R: Read>(input: &Input, stdin: R) -> anyhow::Result<Vec<u8>> {
    match input {
        Input::Hex(text) => Ok(hex::decode(text)?),
        Input::File(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        Input::Stdin => {
            let mut data = Vec::new();
            let mut stdin = stdin;
            stdin
                .read_to_end(&mut data)
                .context("Failed to read standard input")?;
            if looks_like_hex(&data) {
                let text = String::from_utf8_lossy(&data);
                return Ok(hex::decode(&text)?);
            }
            Ok(data)
        }
    }
}

/// Names in any section that still end in an `<offset>` placeholder.
fn unresolved_names(message: &Message) -> usize {
    let questions = message.questions().iter().map(|question| question.name.as_str());
    let records = message
        .answer_records()
        .iter()
        .chain(message.name_server_records())
        .chain(message.additional_records())
        .map(|record| record.name.as_str());
    questions
        .chain(records)
        .filter(|name| unresolved_pointer(name).is_some())
        .count()
}

pub fn decode(args: &DecodeArgs, config: &CodecConfig) -> anyhow::Result<String> {
    let input = args.input();
    let data = read_input(&input, std::io::stdin().lock())?;

    let message = Message::from_bytes_with(&data, config).context("Failed to decode message")?;

    info!(
        bytes = data.len(),
        unresolved_names = unresolved_names(&message),
        "Message decoded"
    );

    match args.format {
        OutputFormat::Text => Ok(message.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&message).context("Failed to render message as JSON")
        }
    }
}

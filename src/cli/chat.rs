// src/cli/chat.rs
// Terminal chat: plays the part of the chat UI around the reply engine

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::config::TherapyConfig;
use crate::conversation::{ChatMessage, Transcript};
use crate::engine::{Picker, ReplyEngine, get_welcome_message};
use crate::error::Result;
use crate::persona::PERSONA_NAME;

/// What a line of terminal input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Reset,
    /// Blank line, nothing to send
    Skip,
    Message(String),
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Skip,
        "/quit" | "/exit" => Input::Quit,
        "/reset" => Input::Reset,
        _ => Input::Message(trimmed.to_string()),
    }
}

async fn say<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(format!("\n{}: {}\n\n", PERSONA_NAME, text).as_bytes())
        .await?;
    writer.flush().await?;
    Ok(())
}

/// Run the conversation loop until `/quit` or end of input.
///
/// With `thinking` set, each reply waits the configured latency first. The
/// engine call itself stays synchronous.
pub async fn run_chat<R, W, P>(
    reader: R,
    mut writer: W,
    mut engine: ReplyEngine<P>,
    thinking: Option<&TherapyConfig>,
) -> Result<Transcript>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    P: Picker,
{
    let mut transcript = Transcript::new();
    let mut lines = reader.lines();

    say(&mut writer, get_welcome_message()).await?;

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Skip => continue,
            Input::Quit => break,
            Input::Reset => {
                transcript.reset();
                say(&mut writer, get_welcome_message()).await?;
            }
            Input::Message(text) => {
                transcript.push(ChatMessage::user(text.clone()));

                if let Some(config) = thinking {
                    let delay = config.thinking_delay();
                    debug!(delay_ms = delay.as_millis() as u64, "Thinking");
                    tokio::time::sleep(delay).await;
                }

                let response = engine.reply(&text);
                say(&mut writer, &response.message).await?;
                transcript.push(ChatMessage::from_response(&response));
            }
        }
    }

    Ok(transcript)
}

/// Chat over stdin/stdout.
pub async fn run_stdio_chat(seed: Option<u64>, no_delay: bool, config: &TherapyConfig) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    let thinking = if no_delay { None } else { Some(config) };

    let transcript = match seed {
        Some(seed) => run_chat(reader, writer, ReplyEngine::seeded(seed), thinking).await?,
        None => run_chat(reader, writer, ReplyEngine::new(), thinking).await?,
    };

    let last = transcript.messages().last().and_then(|m| m.emotion.as_deref());
    debug!(
        messages = transcript.len(),
        user_turns = transcript.user_turns(),
        last_emotion = last.unwrap_or("none"),
        "Chat ended"
    );
    Ok(())
}

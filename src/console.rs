//! Interactive console loop
//!
//! Reads commands line by line from any async reader, writes replies to any
//! async writer. The binary wires it to stdin/stdout; tests feed it byte
//! slices and capture output in a `Vec<u8>`.

use crate::cart::state::Session;
use crate::checkout::{CheckoutFlow, Receipt};
use crate::command::models::COMMAND_PROMPT;
use crate::command::{handle_line, Outcome};
use crate::error::{ShopError, ShopResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Runs the command loop until checkout completes or input ends.
///
/// Returns the receipt when the session ended through checkout, `None` when
/// input ran out first.
pub async fn run<R, W>(
    session: &mut Session,
    mut reader: R,
    writer: &mut W,
) -> ShopResult<Option<Receipt>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        write_prompt(writer, COMMAND_PROMPT).await?;
        let Some(line) = read_line(&mut reader).await? else {
            debug!(session_id = %session.id, "input closed");
            return Ok(None);
        };

        match handle_line(session, &line) {
            Ok(Outcome::Reply(reply)) => write_lines(writer, &reply).await?,
            Ok(Outcome::Checkout { flow, lines: intro }) => {
                write_lines(writer, &intro).await?;
                let flow = drive_checkout(flow, &mut reader, writer).await?;
                return Ok(Some(flow.into_receipt()));
            }
            Err(err) if err.is_recoverable() => {
                if let ShopError::UnknownCommand(action) = &err {
                    info!(session_id = %session.id, %action, "unknown command");
                }
                write_lines(writer, &[err.to_string()]).await?;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Answers the checkout prompts. A closed input counts as an empty answer.
async fn drive_checkout<R, W>(
    mut flow: CheckoutFlow,
    reader: &mut R,
    writer: &mut W,
) -> ShopResult<CheckoutFlow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    while let Some(prompt) = flow.prompt() {
        write_prompt(writer, prompt).await?;
        let answer = read_line(reader).await?.unwrap_or_default();
        let output = flow.respond(&answer);
        write_lines(writer, &output).await?;
    }
    Ok(flow)
}

/// Reads one line without its terminator. Bytes that are not valid UTF-8 are
/// replaced, so a garbled line is answered like any other unknown input.
/// `None` at end of input.
async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> ShopResult<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
}

async fn write_prompt<W: AsyncWrite + Unpin>(writer: &mut W, prompt: &str) -> ShopResult<()> {
    writer.write_all(prompt.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

async fn write_lines<W: AsyncWrite + Unpin>(writer: &mut W, lines: &[String]) -> ShopResult<()> {
    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    Ok(())
}

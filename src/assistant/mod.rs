//! Interactive command loop.
//!
//! Reads commands line by line, hands them to the `Assistant`, and writes
//! each reply back. Logging goes to stderr, so the output writer only ever
//! sees the banner, prompts and replies.

pub mod handlers;

pub use handlers::{Assistant, Reply};

use crate::repositories::ContactRepository;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Run the assistant until `close`/`exit` or end of input.
///
/// # Arguments
/// * `assistant` - The assistant holding the contact store
/// * `input` - Source of command lines
/// * `output` - Destination for the banner, prompts and replies
///
/// # Returns
/// An error only if reading input or writing output fails
pub fn run<R, I, O>(assistant: &mut Assistant<R>, input: I, mut output: O) -> io::Result<()>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", assistant.config().greeting)?;

    let mut lines = input.lines();
    loop {
        write!(output, "\n{}", assistant.config().prompt)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            info!("Input closed, leaving command loop");
            writeln!(output)?;
            break;
        };
        debug!(line = %line, "Received command");

        match assistant.handle_line(&line) {
            Reply::Continue(message) => writeln!(output, "{}", message)?,
            Reply::Exit(message) => {
                writeln!(output, "{}", message)?;
                break;
            }
            Reply::Silent => {}
        }
    }

    output.flush()
}

use std::io::IsTerminal;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tokio::sync::Mutex;

type BoxedReader = Box<dyn AsyncRead + Send + Unpin>;

/// Line source shared by the main loop and the credential prompt.
///
/// A read that is abandoned mid-way keeps its buffered state, so whoever asks
/// next gets the line.
pub struct TerminalInput {
    lines: Mutex<Lines<BufReader<BoxedReader>>>,
    interactive: bool,
    terminal: bool,
}

impl TerminalInput {
    pub fn stdin() -> Self {
        let interactive = std::io::stdin().is_terminal();
        Self {
            terminal: interactive,
            ..Self::from_reader(Box::new(tokio::io::stdin()), interactive)
        }
    }

    pub fn from_reader(reader: BoxedReader, interactive: bool) -> Self {
        Self {
            lines: Mutex::new(BufReader::new(reader).lines()),
            interactive,
            terminal: false,
        }
    }

    /// Whether a person is on the other end.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether keys can be read straight from the terminal, bypassing the line buffer.
    pub fn reads_from_terminal(&self) -> bool {
        self.terminal
    }

    /// Next line without its terminator. `None` at end of input.
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

//! Sentence judge backed by an external command.
//!
//! The prompt goes to the command's stdin and the first line of stdout is
//! parsed as the verdict. A missing command, a timeout or a non-zero exit
//! all resolve to [`Verdict::unavailable`].

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use vocab_core::{build_prompt, Judge, Verdict};

/// Default judge timeout.
pub const DEFAULT_JUDGE_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Judge call failures, never surfaced past this module.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("judge command not found: {0}")]
    NotFound(String),

    #[error("judge timed out after {0:?}")]
    TimedOut(Duration),

    #[error("judge exited with {0}")]
    Failed(ExitStatus),

    #[error("judge i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs a command per sentence with a bounded timeout.
#[derive(Debug, Clone)]
pub struct ProcessJudge {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessJudge {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Run the command with `input` on stdin and return its first non-empty
    /// stdout line. Waiting for exit and reading share one deadline.
    pub fn run(&self, input: &str) -> Result<String, JudgeError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => JudgeError::NotFound(self.program.clone()),
                _ => JudgeError::Io(e),
            })?;

        let deadline = Instant::now() + self.timeout;

        // Only the first non-empty line matters; it is sent as soon as it
        // arrives since a background grandchild may keep stdout open
        let stdout = child.stdout.take();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(match stdout {
                Some(out) => first_line(BufReader::new(out)),
                None => Ok(String::new()),
            });
        });

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                // The child may exit without reading; its status decides the outcome
                tracing::debug!("judge did not accept input: {}", e);
            }
        }

        let status = self.wait(&mut child, deadline)?;
        if !status.success() {
            return Err(JudgeError::Failed(status));
        }

        match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(result) => Ok(result?),
            Err(_) => Err(JudgeError::TimedOut(self.timeout)),
        }
    }

    fn wait(&self, child: &mut Child, deadline: Instant) -> Result<ExitStatus, JudgeError> {
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(JudgeError::TimedOut(self.timeout));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

/// First non-empty line of `reader`, or empty at end of output.
fn first_line<R: BufRead>(mut reader: R) -> std::io::Result<String> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(String::new());
        }
        let line = String::from_utf8_lossy(&buf);
        if !line.trim().is_empty() {
            return Ok(line.trim().to_string());
        }
    }
}

impl Judge for ProcessJudge {
    fn evaluate(&self, sentence: &str, word: &str, definition: &str) -> Verdict {
        match self.run(&build_prompt(sentence, word, definition)) {
            Ok(output) => Verdict::parse(&output),
            Err(e) => {
                tracing::debug!("judge unavailable: {}", e);
                Verdict::unavailable()
            }
        }
    }
}

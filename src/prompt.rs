use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::error::Result;
use crate::interrupt::Interrupt;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    /// Ctrl+C from the operator, as a key press or as SIGINT.
    Interrupt,
    /// Input closed before a line was entered.
    Eof,
}

/// Where operator answers come from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Reply>;
}

/// Interactive terminal input. Keys are read in raw mode so Ctrl+C arrives as
/// a key event; a SIGINT from elsewhere is picked up from the flag between polls.
pub struct TerminalInput {
    interrupt: Interrupt,
}

impl TerminalInput {
    pub fn new(interrupt: Interrupt) -> Self {
        Self { interrupt }
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Reply> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        terminal::enable_raw_mode()?;
        let result = read_raw_line(&mut stdout, &self.interrupt);
        terminal::disable_raw_mode()?;
        println!();
        result
    }
}

fn read_raw_line(stdout: &mut std::io::Stdout, interrupt: &Interrupt) -> Result<Reply> {
    let mut line = String::new();
    loop {
        if interrupt.is_raised() {
            return Ok(Reply::Interrupt);
        }
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(Reply::Interrupt),
                KeyCode::Char('d') if line.is_empty() => return Ok(Reply::Eof),
                _ => continue,
            }
        }
        match key.code {
            KeyCode::Enter => return Ok(Reply::Line(line)),
            KeyCode::Backspace => {
                if line.pop().is_some() {
                    write!(stdout, "\u{8} \u{8}")?;
                    stdout.flush()?;
                }
            }
            KeyCode::Char(c) => {
                line.push(c);
                write!(stdout, "{c}")?;
                stdout.flush()?;
            }
            _ => {}
        }
    }
}

/// Line-oriented input from any reader, used when stdin is not a terminal.
///
/// Lines are read on a background thread so a blocked read never keeps the
/// interrupt flag from being noticed.
pub struct ReaderInput {
    lines: Receiver<std::io::Result<String>>,
    interrupt: Interrupt,
}

impl ReaderInput {
    pub fn new<R>(reader: R, interrupt: Interrupt) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // `lines` strips only the `\n` / `\r\n` terminator; answers are
            // otherwise matched verbatim.
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        });
        Self {
            lines: rx,
            interrupt,
        }
    }
}

impl LineSource for ReaderInput {
    fn read_line(&mut self, prompt: &str) -> Result<Reply> {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let reply = loop {
            if self.interrupt.is_raised() {
                break Reply::Interrupt;
            }
            match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => break Reply::Line(line?),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break Reply::Eof,
            }
        };
        println!();
        Ok(reply)
    }
}

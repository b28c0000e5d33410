//! Command stream output
//!
//! Line protocol consumed by the filesystem under test:
//!
//! ```text
//! create_dir <path>
//! create     <path>
//! ok
//! exit
//! ```
//!
//! `ok` lines only appear in the companion (expected output) stream.

use std::fmt;
use std::io::Write;

use indexmap::map::Iter;

use crate::error::Result;
use crate::tree::Node;

/// Directory creation keyword.
pub const CREATE_DIR: &str = "create_dir";

/// File creation keyword, padded to line up with `create_dir`.
pub const CREATE: &str = "create    ";

/// Acknowledgement printed by the filesystem under test per created file.
pub const ACK: &str = "ok";

/// Terminating command.
pub const EXIT: &str = "exit";

/// One protocol line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    CreateDir(&'a str),
    Create(&'a str),
    Ok,
    Exit,
}

impl<'a> Command<'a> {
    /// Parse a single line (without trailing newline).
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let cmd = match (parts.next()?, parts.next()) {
            ("create_dir", Some(path)) => Command::CreateDir(path),
            ("create", Some(path)) => Command::Create(path),
            ("ok", None) => return Some(Command::Ok),
            ("exit", None) => return Some(Command::Exit),
            _ => return None,
        };
        match parts.next() {
            Some(_) => None,
            None => Some(cmd),
        }
    }

    /// Path operand, if the command has one.
    pub fn path(&self) -> Option<&'a str> {
        match self {
            Command::CreateDir(path) | Command::Create(path) => Some(path),
            Command::Ok | Command::Exit => None,
        }
    }
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::CreateDir(path) => write!(f, "{} {}", CREATE_DIR, path),
            Command::Create(path) => write!(f, "{} {}", CREATE, path),
            Command::Ok => f.write_str(ACK),
            Command::Exit => f.write_str(EXIT),
        }
    }
}

/// Write one creation command per node below `root`, in pre-order.
///
/// Siblings appear in insertion order and every directory precedes its
/// contents. Returns the number of commands written.
pub fn write_commands<W: Write + ?Sized>(root: &Node, out: &mut W) -> Result<u64> {
    let mut path = String::new();
    let mut written: u64 = 0;
    // (remaining children, length of the parent path)
    let mut stack: Vec<(Iter<'_, String, Node>, usize)> = vec![(root.children().iter(), 0)];

    loop {
        let Some((children, base)) = stack.last_mut() else {
            break;
        };
        let base = *base;
        let Some((segment, child)) = children.next() else {
            stack.pop();
            continue;
        };

        path.truncate(base);
        path.push_str(segment);
        if child.is_dir() {
            writeln!(out, "{}", Command::CreateDir(&path))?;
            stack.push((child.children().iter(), path.len()));
        } else {
            writeln!(out, "{}", Command::Create(&path))?;
        }
        written += 1;
    }

    Ok(written)
}

/// Write the full script for `root`: all creation commands, then `exit`.
pub fn write_script<W: Write + ?Sized>(root: &Node, out: &mut W) -> Result<u64> {
    let written = write_commands(root, out)?;
    writeln!(out, "{}", Command::Exit)?;
    tracing::debug!(commands = written, "script written");
    Ok(written)
}

/// Write the expected output of replaying a script: `files` lines of `ok`.
pub fn write_acks<W: Write + ?Sized>(files: u64, out: &mut W) -> Result<()> {
    for _ in 0..files {
        writeln!(out, "{}", Command::Ok)?;
    }
    Ok(())
}

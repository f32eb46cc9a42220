//! Command scripts replayed against an [`avl::Tree`](crate::avl::Tree) of words.
//!
//! A script is a sequence of whitespace-separated tokens. `stats`, `traverse` and `paths` stand
//! alone while `insert` and `delete` take the next token as their word.
//!
//! # Examples
//!
//! ```
//! use dendrology::order::OrderCode;
//! use dendrology::script::{self, Interpreter};
//!
//! let commands = script::parse("insert fir insert oak insert elm stats").unwrap();
//!
//! let mut interpreter = Interpreter::new(OrderCode::Lexicographic);
//! let mut out = Vec::new();
//! interpreter.run(&commands, &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Inserted : fir\n\
//!      Inserted : oak\n\
//!      Inserted : elm\n\
//!      Stats: size = 3, height = 2, #full-nodes = 1, fibonacci? = false\n"
//! );
//! ```

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::{debug, info};

use crate::avl::Tree;
use crate::order::Compare;

/// One step of a command script.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Report size, height, full node count and Fibonacci-ness.
    Stats,
    /// List the words in order.
    Traverse,
    /// List every root-to-leaf path.
    Paths,
    /// Add a word.
    Insert(String),
    /// Remove a word.
    Delete(String),
}

impl Command {
    /// The keyword that introduces this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Traverse => "traverse",
            Self::Paths => "paths",
            Self::Insert(_) => "insert",
            Self::Delete(_) => "delete",
        }
    }

    /// How many script tokens this command takes up.
    fn token_count(&self) -> usize {
        match self {
            Self::Insert(_) | Self::Delete(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert(word) | Self::Delete(word) => write!(f, "{} {}", self.keyword(), word),
            _ => f.write_str(self.keyword()),
        }
    }
}

/// Errors found while parsing a script. Positions count tokens from zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ScriptError {
    /// A token that isn't one of the commands.
    #[error("unknown command `{token}` at token {position}")]
    UnknownCommand {
        /// The offending token.
        token: String,
        /// Where it appeared.
        position: usize,
    },
    /// `insert` or `delete` as the last token.
    #[error("`{command}` at token {position} is missing its word")]
    MissingOperand {
        /// The command keyword.
        command: &'static str,
        /// Where the command appeared.
        position: usize,
    },
    /// A single command was asked for but the input held no tokens.
    #[error("no command given")]
    Empty,
}

/// Parses a whole script. Nothing is executed until every command has parsed.
pub fn parse(script: &str) -> Result<Vec<Command>, ScriptError> {
    let mut tokens = script.split_whitespace().enumerate();
    let mut commands = Vec::new();

    while let Some((position, token)) = tokens.next() {
        let mut operand = |command: &'static str| {
            tokens
                .next()
                .map(|(_, word)| word.to_owned())
                .ok_or(ScriptError::MissingOperand { command, position })
        };

        let command = match token {
            "stats" => Command::Stats,
            "traverse" => Command::Traverse,
            "paths" => Command::Paths,
            "insert" => Command::Insert(operand("insert")?),
            "delete" => Command::Delete(operand("delete")?),
            _ => {
                return Err(ScriptError::UnknownCommand {
                    token: token.to_owned(),
                    position,
                })
            }
        };
        commands.push(command);
    }

    debug!("parsed {} commands", commands.len());
    Ok(commands)
}

impl FromStr for Command {
    type Err = ScriptError;

    /// Parses a single command, e.g. `insert oak`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut commands = parse(s)?.into_iter();
        match (commands.next(), commands.next()) {
            (Some(command), None) => Ok(command),
            (None, _) => Err(ScriptError::Empty),
            (Some(first), Some(_)) => {
                let position = first.token_count();
                Err(ScriptError::UnknownCommand {
                    token: s.split_whitespace().nth(position).unwrap_or_default().to_owned(),
                    position,
                })
            }
        }
    }
}

/// Replays commands against a tree of words, writing a line-oriented report.
pub struct Interpreter<C> {
    tree: Tree<String, C>,
}

impl<C: Compare<String>> Interpreter<C> {
    /// An interpreter over an empty tree ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            tree: Tree::with_comparator(cmp),
        }
    }

    /// The tree the commands have built so far.
    pub fn tree(&self) -> &Tree<String, C> {
        &self.tree
    }

    /// Runs every command in order, stopping at the first write failure.
    pub fn run<W: Write>(&mut self, commands: &[Command], out: &mut W) -> io::Result<()> {
        info!("replaying {} commands", commands.len());
        for command in commands {
            self.execute(command, out)?;
        }
        out.flush()
    }

    /// Runs a single command and writes its report to `out`.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> io::Result<()> {
        debug!("executing `{}`", command);
        match command {
            Command::Stats => writeln!(out, "Stats: {}", self.tree.stats()),
            Command::Traverse => {
                writeln!(out, "In-Order Traversal :")?;
                self.tree.iter().try_for_each(|word| writeln!(out, "{}", word))
            }
            Command::Paths => {
                let paths = self.tree.gen_paths();
                writeln!(out, "Root-to-Leaf Paths : {}", paths.len())?;
                for path in paths {
                    let words: Vec<&str> = path.into_iter().map(String::as_str).collect();
                    writeln!(out, "{}", words.join(" "))?;
                }
                Ok(())
            }
            Command::Insert(word) => {
                if self.tree.insert(word.clone()) {
                    writeln!(out, "Inserted : {}", word)
                } else {
                    writeln!(out, "Already present : {}", word)
                }
            }
            Command::Delete(word) => {
                if self.tree.remove(word) {
                    writeln!(out, "Deleted : {}", word)
                } else {
                    writeln!(out, "Not found : {}", word)
                }
            }
        }
    }
}

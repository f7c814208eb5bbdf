use brandon_core::{ArgType, Scalar};

/// The full command surface of an application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cli {
    /// Top-level commands that do not belong to a group
    pub commands: Vec<Command>,
    pub groups: Vec<Group>,
}

impl Cli {
    /// Total number of commands, grouped or not
    pub fn command_count(&self) -> usize {
        self.commands.len() + self.groups.iter().map(|g| g.commands.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.groups.is_empty()
    }
}

/// A named collection of commands
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub description: Option<String>,
    /// Commands, with the group-level arguments and options already merged in
    pub commands: Vec<Command>,
}

/// A CLI command
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<Argument>,
    pub options: Vec<CliOption>,
}

/// A positional argument
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub ty: ArgType,
    pub description: Option<String>,
    pub example: Option<Scalar>,
}

/// A named option (`--name`, optionally `-s`)
#[derive(Debug, Clone, PartialEq)]
pub struct CliOption {
    pub name: String,
    pub ty: ArgType,
    pub short: Option<char>,
    pub default: Option<Scalar>,
    pub description: Option<String>,
    pub example: Option<Scalar>,
}

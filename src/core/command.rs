//! Command vocabulary and the trigger-phrase parser.

/// Every command the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Exit,
    DeletePhone,
    Birthday,
    UpcomingBirthdays,
    Help,
    Search,
    Unknown,
}

/// Trigger phrases in match order; the first matching prefix wins.
pub const COMMANDS: &[(Command, &[&str])] = &[
    (Command::Hello, &["hello"]),
    (Command::Add, &["add "]),
    (Command::Change, &["change "]),
    (Command::Phone, &["phone "]),
    (Command::ShowAll, &["show all"]),
    (Command::Exit, &["good bye", "close", "exit", "."]),
    (Command::DeletePhone, &["del "]),
    (Command::Birthday, &["birthday "]),
    (Command::UpcomingBirthdays, &["user birthday"]),
    (Command::Help, &["?", "help"]),
    (Command::Search, &["search"]),
];

impl Command {
    /// Whether a successful run changes the book and must be saved.
    pub fn is_mutating(self) -> bool {
        matches!(self, Command::Add | Command::Change | Command::DeletePhone)
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "greeting",
            Command::Add => "<name> <phone> [DD.MM.YYYY]",
            Command::Change => "<name> <old phone> <new phone>",
            Command::Phone => "<name>",
            Command::ShowAll => "list every contact",
            Command::Exit => "leave the address book",
            Command::DeletePhone => "<name> <phone>",
            Command::Birthday => "<name>",
            Command::UpcomingBirthdays => "contacts with a birthday soon",
            Command::Help => "this help",
            Command::Search => "<text...>",
            Command::Unknown => "",
        }
    }

    pub fn triggers(self) -> &'static [&'static str] {
        COMMANDS
            .iter()
            .find(|(command, _)| *command == self)
            .map(|(_, triggers)| *triggers)
            .unwrap_or(&[])
    }
}

/// A command together with its whitespace-split arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub args: Vec<String>,
}

/// Matches `input` case-insensitively against the trigger table.
pub fn parse(input: &str) -> ParsedCommand {
    for (command, triggers) in COMMANDS {
        for trigger in *triggers {
            let matched = input
                .get(..trigger.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(trigger));
            if matched {
                let args = input[trigger.len()..]
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                return ParsedCommand {
                    command: *command,
                    args,
                };
            }
        }
    }
    ParsedCommand {
        command: Command::Unknown,
        args: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_prefix() {
        let upper = parse("ADD John 5551234");
        let lower = parse("add John 5551234");
        assert_eq!(upper, lower);
        assert_eq!(upper.command, Command::Add);
        assert_eq!(upper.args, vec!["John", "5551234"]);
    }

    #[test]
    fn test_arguments_keep_their_case() {
        let parsed = parse("Phone McDonald");
        assert_eq!(parsed.command, Command::Phone);
        assert_eq!(parsed.args, vec!["McDonald"]);
    }

    #[test]
    fn test_exit_triggers() {
        for input in ["good bye", "close", "exit", ".", "Good Bye", "EXIT"] {
            assert_eq!(parse(input).command, Command::Exit, "{input}");
        }
    }

    #[test]
    fn test_multiword_triggers() {
        assert_eq!(parse("show all").command, Command::ShowAll);
        assert_eq!(parse("user birthday").command, Command::UpcomingBirthdays);
        assert_eq!(parse("birthday Ann").command, Command::Birthday);
        assert_eq!(parse("del Ann 123").command, Command::DeletePhone);
        assert_eq!(parse("?").command, Command::Help);
        assert_eq!(parse("help").command, Command::Help);
        assert_eq!(parse("hello").command, Command::Hello);
    }

    #[test]
    fn test_search_collects_terms() {
        let parsed = parse("search  ann   555 ");
        assert_eq!(parsed.command, Command::Search);
        assert_eq!(parsed.args, vec!["ann", "555"]);
    }

    #[test]
    fn test_unknown() {
        for input in ["", "add", "remove Ann", "ümlaut"] {
            let parsed = parse(input);
            assert_eq!(parsed.command, Command::Unknown, "{input}");
            assert!(parsed.args.is_empty());
        }
    }

    #[test]
    fn test_every_command_has_triggers() {
        for (command, triggers) in COMMANDS {
            assert!(!triggers.is_empty());
            assert_eq!(command.triggers(), *triggers);
        }
        assert!(Command::Unknown.triggers().is_empty());
    }
}

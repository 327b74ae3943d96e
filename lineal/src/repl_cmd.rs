use ahash::HashMap;

use crate::error::CliError;

/// What the loop should do after a command ran.
#[derive(Debug, PartialEq)]
pub(crate) enum Reply {
    /// Print the text and read the next command
    Text(String),
    Quit,
}

impl Reply {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }
}

type Execute<C> = Box<dyn Fn(&[&str], &mut C, &CommandDefinitions<C>) -> Result<Reply, CliError>>;

pub(crate) struct CommandDefinition<C> {
    name: &'static str,
    short_name: Option<&'static str>,
    about: &'static str,
    args: Vec<ArgumentDefinition>,
    execute: Execute<C>,
}

pub(crate) struct CommandDefinitions<C> {
    pub(crate) definitions: Vec<CommandDefinition<C>>,
    by_name: HashMap<&'static str, usize>,
    by_short_name: HashMap<&'static str, usize>,
}

pub(crate) struct ArgumentDefinition {
    name: &'static str,
    default: Option<&'static str>,
}

impl ArgumentDefinition {
    pub fn new(name: &'static str, default: Option<&'static str>) -> Self {
        Self { name, default }
    }
}

impl<C> CommandDefinitions<C> {
    pub(crate) fn new(definitions: Vec<CommandDefinition<C>>) -> Self {
        let mut table = Self {
            definitions: Vec::new(),
            by_name: HashMap::default(),
            by_short_name: HashMap::default(),
        };
        for definition in definitions {
            table.add(definition);
        }
        table
    }

    pub(crate) fn add(&mut self, definition: CommandDefinition<C>) {
        let index = self.definitions.len();
        self.by_name.insert(definition.name, index);
        if let Some(short_name) = definition.short_name {
            self.by_short_name.insert(short_name, index);
        }
        self.definitions.push(definition);
    }

    /// Run one input line against `context`.
    ///
    /// Failures are turned into text here; the collection is left as it was
    /// before the command.
    pub(crate) fn execute(&self, line: &str, context: &mut C) -> Reply {
        let parts = line.split_whitespace().collect::<Vec<_>>();
        let Some((&command_s, args)) = parts.split_first() else {
            return Reply::text("");
        };
        let Some(command) = self.get(command_s) else {
            tracing::info!(command = command_s, "unknown command");
            return Reply::Text(format!("Unknown command: {}", command_s));
        };
        if args.len() > command.args.len() {
            tracing::info!(command = command.name, "too many arguments");
            return Reply::Text(format!("Too many arguments for command: {}", command_s));
        }
        let args = command.preprocess_arguments(args);
        if args.len() < command.args.len() {
            tracing::info!(command = command.name, "too few arguments");
            return Reply::Text(format!("Too few arguments for command: {}", command_s));
        }
        tracing::debug!(command = command.name, ?args, "dispatch");
        match (command.execute)(&args, context, self) {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_core() {
                    tracing::warn!(command = command.name, error = %e, "operation failed");
                } else {
                    tracing::info!(command = command.name, error = %e, "input rejected");
                }
                Reply::Text(e.to_string())
            }
        }
    }

    /// One line of help per command.
    pub(crate) fn help(&self) -> String {
        self.definitions
            .iter()
            .map(|definition| definition.help())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn get(&self, command: &str) -> Option<&CommandDefinition<C>> {
        self.by_name
            .get(command)
            .or_else(|| self.by_short_name.get(command))
            .map(|&i| &self.definitions[i])
    }
}

impl<C> CommandDefinition<C> {
    pub(crate) fn new(
        name: &'static str,
        short_name: Option<&'static str>,
        about: &'static str,
        args: Vec<ArgumentDefinition>,
        execute: Execute<C>,
    ) -> Self {
        Self {
            name,
            short_name,
            about,
            args,
            execute,
        }
    }

    pub(crate) fn help(&self) -> String {
        let description = self.arg_description();
        let main = if description.is_empty() {
            format!("{} - {}", self.name, self.about)
        } else {
            format!("{} {} - {}", self.name, description, self.about)
        };
        if let Some(short_name) = self.short_name {
            format!("{} ({})", main, short_name)
        } else {
            main
        }
    }

    fn arg_description(&self) -> String {
        self.args
            .iter()
            .map(|arg| {
                if let Some(default) = arg.default {
                    format!("<{}>={}", arg.name, default)
                } else {
                    format!("<{}>", arg.name)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn preprocess_arguments<'a>(&self, args: &[&'a str]) -> Vec<&'a str> {
        let mut result = Vec::new();
        let mut i = 0;
        for arg in &self.args {
            if i < args.len() {
                result.push(args[i]);
                i += 1;
            } else if let Some(default) = arg.default {
                result.push(default);
            }
        }
        result
    }
}

/// The `help` and `quit` commands every command set ends with.
pub(crate) fn session_commands<C: 'static>() -> Vec<CommandDefinition<C>> {
    vec![
        CommandDefinition::new(
            "help",
            Some("h"),
            "Show this help",
            vec![],
            Box::new(help::<C>),
        ),
        CommandDefinition::new(
            "quit",
            Some("q"),
            "Leave the session",
            vec![],
            Box::new(quit::<C>),
        ),
    ]
}

fn help<C>(_: &[&str], _: &mut C, definitions: &CommandDefinitions<C>) -> Result<Reply, CliError> {
    Ok(Reply::Text(definitions.help()))
}

fn quit<C>(_: &[&str], _: &mut C, _: &CommandDefinitions<C>) -> Result<Reply, CliError> {
    Ok(Reply::Quit)
}

/// Run `lines` in order and record each prompt with its reply.
#[cfg(test)]
pub(crate) fn transcript<C>(
    commands: &CommandDefinitions<C>,
    context: &mut C,
    lines: &[&str],
) -> String {
    let mut output = Vec::new();
    for line in lines {
        output.push(format!("> {}", line));
        match commands.execute(line, context) {
            Reply::Text(text) => output.push(text),
            Reply::Quit => {
                output.push("(quit)".to_string());
                break;
            }
        }
    }
    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::parse_index;

    fn add(
        args: &[&str],
        counter: &mut i64,
        _: &CommandDefinitions<i64>,
    ) -> Result<Reply, CliError> {
        *counter += parse_index(args[0])? as i64;
        Ok(Reply::Text(counter.to_string()))
    }

    fn set(
        args: &[&str],
        counter: &mut i64,
        _: &CommandDefinitions<i64>,
    ) -> Result<Reply, CliError> {
        *counter = parse_index(args[0])? as i64;
        Ok(Reply::text(""))
    }

    fn counter_commands() -> CommandDefinitions<i64> {
        let mut commands: Vec<CommandDefinition<i64>> = vec![
            CommandDefinition::new(
                "add",
                Some("a"),
                "Add to the counter",
                vec![ArgumentDefinition::new("amount", Some("1"))],
                Box::new(add),
            ),
            CommandDefinition::new(
                "set",
                None,
                "Set the counter",
                vec![ArgumentDefinition::new("value", None)],
                Box::new(set),
            ),
        ];
        commands.extend(session_commands());
        CommandDefinitions::new(commands)
    }

    #[test]
    fn test_execute_with_default_argument() {
        let commands = counter_commands();
        let mut counter = 0;
        assert_eq!(commands.execute("add", &mut counter), Reply::text("1"));
        assert_eq!(commands.execute("a 5", &mut counter), Reply::text("6"));
    }

    #[test]
    fn test_argument_count() {
        let commands = counter_commands();
        let mut counter = 0;
        assert_eq!(
            commands.execute("set", &mut counter),
            Reply::text("Too few arguments for command: set")
        );
        assert_eq!(
            commands.execute("add 1 2", &mut counter),
            Reply::text("Too many arguments for command: add")
        );
        assert_eq!(
            commands.execute("frobnicate", &mut counter),
            Reply::text("Unknown command: frobnicate")
        );
        assert_eq!(counter, 0);
    }

    #[test]
    fn test_rejected_input_leaves_context() {
        let commands = counter_commands();
        let mut counter = 3;
        assert_eq!(
            commands.execute("add x", &mut counter),
            Reply::text("Invalid input. Index must be an integer, got `x`.")
        );
        assert_eq!(counter, 3);
    }

    #[test]
    fn test_help_and_quit() {
        let commands = counter_commands();
        let mut counter = 0;
        assert_eq!(commands.execute("q", &mut counter), Reply::Quit);
        let Reply::Text(help) = commands.execute("help", &mut counter) else {
            panic!("help should print");
        };
        insta::assert_snapshot!(help, @r###"
        add <amount>=1 - Add to the counter (a)
        set <value> - Set the counter
        help - Show this help (h)
        quit - Leave the session (q)
        "###);
    }
}

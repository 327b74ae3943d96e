use rustyline::error::ReadlineError;

use crate::repl_cmd::{CommandDefinitions, Reply};

/// Read commands until `quit`, CTRL-C or CTRL-D and run them against
/// `context`.
pub(crate) fn run<C>(commands: &CommandDefinitions<C>, context: &mut C) -> anyhow::Result<()> {
    let mut rl = rustyline::DefaultEditor::new()?;
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                match commands.execute(&line, context) {
                    Reply::Text(text) => println!("{}", text),
                    Reply::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

use clap::{Parser, ValueEnum};
use lineal_core::{AnySequence, Sequence, SequenceKind};

use crate::element::{render, Element, ElementType};
use crate::error::{parse_index, CliError};
use crate::repl;
use crate::repl_cmd::{
    session_commands, ArgumentDefinition, CommandDefinition, CommandDefinitions, Reply,
};

/// Which of the four sequence variants backs the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Backing {
    MutableArray,
    ImmutableArray,
    MutableList,
    ImmutableList,
}

impl From<Backing> for SequenceKind {
    fn from(backing: Backing) -> Self {
        match backing {
            Backing::MutableArray => SequenceKind::MutableArray,
            Backing::ImmutableArray => SequenceKind::ImmutableArray,
            Backing::MutableList => SequenceKind::MutableList,
            Backing::ImmutableList => SequenceKind::ImmutableList,
        }
    }
}

#[derive(Debug, Parser)]
pub(crate) struct SequenceSession {
    /// Element type held by the sequence.
    #[arg(long, value_enum, default_value_t = ElementType::Int)]
    pub(crate) element: ElementType,
    /// Storage variant backing the sequence.
    ///
    /// Immutable variants never change; every edit replaces the session's
    /// sequence with the new copy.
    #[arg(long, value_enum, default_value_t = Backing::MutableArray)]
    pub(crate) backing: Backing,
}

impl SequenceSession {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let kind = SequenceKind::from(self.backing);
        match self.element {
            ElementType::Int => run_with::<i64>(kind),
            ElementType::Double => run_with::<f64>(kind),
            ElementType::String => run_with::<String>(kind),
        }
    }
}

fn run_with<E: Element>(kind: SequenceKind) -> anyhow::Result<()> {
    tracing::debug!(%kind, element = E::NAME, "starting sequence session");
    let commands = sequence_commands::<E>();
    let mut sequence = AnySequence::<E>::new(kind);
    println!("Empty {kind} sequence of {}. Type `help` for commands.", E::NAME);
    repl::run(&commands, &mut sequence)
}

type Commands<E> = CommandDefinitions<AnySequence<E>>;

type Outcome = Result<Reply, CliError>;

pub(crate) fn sequence_commands<E: Element>() -> Commands<E> {
    let mut definitions = vec![
        CommandDefinition::new(
            "show",
            Some("s"),
            "Show the sequence",
            vec![],
            Box::new(show::<E>),
        ),
        CommandDefinition::new(
            "first",
            Some("f"),
            "Get the first element",
            vec![],
            Box::new(first::<E>),
        ),
        CommandDefinition::new(
            "last",
            Some("l"),
            "Get the last element",
            vec![],
            Box::new(last::<E>),
        ),
        CommandDefinition::new(
            "get",
            Some("g"),
            "Get the element at an index",
            vec![ArgumentDefinition::new("index", None)],
            Box::new(get::<E>),
        ),
        CommandDefinition::new(
            "len",
            Some("n"),
            "Length of the sequence",
            vec![],
            Box::new(len::<E>),
        ),
        CommandDefinition::new(
            "append",
            Some("a"),
            "Add a value at the end",
            vec![ArgumentDefinition::new("value", None)],
            Box::new(append::<E>),
        ),
        CommandDefinition::new(
            "prepend",
            Some("p"),
            "Add a value at the start",
            vec![ArgumentDefinition::new("value", None)],
            Box::new(prepend::<E>),
        ),
        CommandDefinition::new(
            "insert",
            Some("i"),
            "Insert a value so it ends up at an index",
            vec![
                ArgumentDefinition::new("value", None),
                ArgumentDefinition::new("index", None),
            ],
            Box::new(insert::<E>),
        ),
        CommandDefinition::new(
            "remove",
            Some("r"),
            "Remove the element at an index",
            vec![ArgumentDefinition::new("index", None)],
            Box::new(remove::<E>),
        ),
        CommandDefinition::new(
            "sub",
            None,
            "Show the elements from start to end inclusive",
            vec![
                ArgumentDefinition::new("start", None),
                ArgumentDefinition::new("end", None),
            ],
            Box::new(sub::<E>),
        ),
        CommandDefinition::new(
            "slice",
            None,
            "Show the elements from start up to end, clamped",
            vec![
                ArgumentDefinition::new("start", None),
                ArgumentDefinition::new("end", None),
            ],
            Box::new(slice::<E>),
        ),
        CommandDefinition::new(
            "map",
            Some("m"),
            "Show the mapped sequence",
            vec![],
            Box::new(map::<E>),
        ),
        CommandDefinition::new(
            "where",
            Some("w"),
            "Show the filtered sequence",
            vec![],
            Box::new(filter::<E>),
        ),
        CommandDefinition::new(
            "reduce",
            None,
            "Show the sum of the elements",
            vec![],
            Box::new(reduce::<E>),
        ),
    ];
    definitions.extend(session_commands());
    CommandDefinitions::new(definitions)
}

/// Keep the receiver for in-place edits, switch to the copy otherwise.
fn settle<E: Element>(sequence: &mut AnySequence<E>, fresh: Option<AnySequence<E>>) -> Reply {
    if let Some(fresh) = fresh {
        *sequence = fresh;
    }
    Reply::Text(render(sequence.iter()))
}

fn show<E: Element>(_: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    Ok(Reply::Text(render(sequence.iter())))
}

fn first<E: Element>(_: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    Ok(Reply::Text(format!("First element: {}", sequence.first()?)))
}

fn last<E: Element>(_: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    Ok(Reply::Text(format!("Last element: {}", sequence.last()?)))
}

fn get<E: Element>(args: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let index = parse_index(args[0])?;
    Ok(Reply::Text(format!("Element: {}", sequence.get(index)?)))
}

fn len<E: Element>(_: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    Ok(Reply::Text(format!("Length: {}", sequence.len())))
}

fn append<E: Element>(args: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let value = E::parse(args[0])?;
    let fresh = sequence.append(value)?.into_fresh();
    Ok(settle(sequence, fresh))
}

fn prepend<E: Element>(args: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let value = E::parse(args[0])?;
    let fresh = sequence.prepend(value)?.into_fresh();
    Ok(settle(sequence, fresh))
}

fn insert<E: Element>(args: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let value = E::parse(args[0])?;
    let index = parse_index(args[1])?;
    let fresh = sequence.insert_at(value, index)?.into_fresh();
    Ok(settle(sequence, fresh))
}

fn remove<E: Element>(args: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let index = parse_index(args[0])?;
    let fresh = sequence.remove(index)?.into_fresh();
    Ok(settle(sequence, fresh))
}

fn sub<E: Element>(args: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let start = parse_index(args[0])?;
    let end = parse_index(args[1])?;
    let sub = sequence.subsequence(start, end)?;
    Ok(Reply::Text(render(sub.iter())))
}

fn slice<E: Element>(args: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let start = parse_index(args[0])?;
    let end = parse_index(args[1])?;
    let slice = sequence.slice(start, end)?;
    Ok(Reply::Text(render(slice.iter())))
}

fn map<E: Element>(_: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let transforms = E::require_transforms("Map")?;
    let mapped = sequence.map(transforms.map);
    Ok(Reply::Text(format!(
        "Mapped ({}): {}",
        transforms.map_label,
        render(mapped.iter())
    )))
}

fn filter<E: Element>(_: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let transforms = E::require_transforms("Where")?;
    let filtered = sequence.filter(transforms.predicate);
    Ok(Reply::Text(format!(
        "Filtered ({}): {}",
        transforms.where_label,
        render(filtered.iter())
    )))
}

fn reduce<E: Element>(_: &[&str], sequence: &mut AnySequence<E>, _: &Commands<E>) -> Outcome {
    let transforms = E::require_transforms("Reduce")?;
    let sum = sequence.reduce(transforms.add, transforms.zero);
    Ok(Reply::Text(format!("Reduced sum: {}", sum)))
}

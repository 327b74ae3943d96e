use clap::Parser;
use lineal_core::{ContainerExt, Deque, Queue, Stack};

use crate::element::{render, Element, ElementType};
use crate::error::{parse_index, CliError};
use crate::repl;
use crate::repl_cmd::{
    session_commands, ArgumentDefinition, CommandDefinition, CommandDefinitions, Reply,
};

/// Which container a session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContainerType {
    Queue,
    Stack,
    Deque,
}

impl ContainerType {
    fn name(&self) -> &'static str {
        match self {
            ContainerType::Queue => "queue",
            ContainerType::Stack => "stack",
            ContainerType::Deque => "deque",
        }
    }
}

#[derive(Debug, Parser)]
pub(crate) struct ContainerSession {
    /// Element type held by the container.
    #[arg(long, value_enum, default_value_t = ElementType::Int)]
    pub(crate) element: ElementType,
}

impl ContainerSession {
    pub(crate) fn run(&self, container: ContainerType) -> anyhow::Result<()> {
        match self.element {
            ElementType::Int => run_with::<i64>(container),
            ElementType::Double => run_with::<f64>(container),
            ElementType::String => run_with::<String>(container),
        }
    }
}

fn run_with<E: Element>(container: ContainerType) -> anyhow::Result<()> {
    tracing::debug!(
        container = container.name(),
        element = E::NAME,
        "starting container session"
    );
    println!(
        "Empty {} of {}. Type `help` for commands.",
        container.name(),
        E::NAME
    );
    match container {
        ContainerType::Queue => repl::run(&queue_commands::<E>(), &mut Queue::new()),
        ContainerType::Stack => repl::run(&stack_commands::<E>(), &mut Stack::new()),
        ContainerType::Deque => repl::run(&deque_commands::<E>(), &mut Deque::new()),
    }
}

type Outcome = Result<Reply, CliError>;

fn no_args<C>(
    name: &'static str,
    short_name: Option<&'static str>,
    about: &'static str,
    execute: fn(&[&str], &mut C, &CommandDefinitions<C>) -> Outcome,
) -> CommandDefinition<C>
where
    C: 'static,
{
    CommandDefinition::new(name, short_name, about, vec![], Box::new(execute))
}

fn one_arg<C>(
    name: &'static str,
    short_name: Option<&'static str>,
    about: &'static str,
    argument: &'static str,
    execute: fn(&[&str], &mut C, &CommandDefinitions<C>) -> Outcome,
) -> CommandDefinition<C>
where
    C: 'static,
{
    CommandDefinition::new(
        name,
        short_name,
        about,
        vec![ArgumentDefinition::new(argument, None)],
        Box::new(execute),
    )
}

/// Commands every container understands, followed by `help` and `quit`.
fn with_shared_commands<E, C>(mut definitions: Vec<CommandDefinition<C>>) -> CommandDefinitions<C>
where
    E: Element,
    C: ContainerExt<E> + 'static,
{
    definitions.extend([
        no_args("show", Some("s"), "Show the elements front to back", show::<E, C>),
        no_args("len", Some("n"), "Number of elements", len::<E, C>),
        one_arg("get", Some("g"), "Get the element at an index", "index", get::<E, C>),
        one_arg("contains", Some("c"), "Whether a value is present", "value", contains::<E, C>),
        no_args("map", Some("m"), "Show the mapped elements", map::<E, C>),
        no_args("where", Some("w"), "Show the filtered elements", filter::<E, C>),
        no_args("split", None, "Partition by the filter predicate", split::<E, C>),
        no_args("reduce", None, "Show the sum of the elements", reduce::<E, C>),
        no_args("clear", None, "Remove every element", clear::<E, C>),
    ]);
    definitions.extend(session_commands());
    CommandDefinitions::new(definitions)
}

pub(crate) fn queue_commands<E: Element>() -> CommandDefinitions<Queue<E>> {
    with_shared_commands::<E, _>(vec![
        one_arg("enqueue", Some("e"), "Add a value at the tail", "value", enqueue::<E>),
        no_args("dequeue", Some("d"), "Remove the head", dequeue::<E>),
        no_args("front", Some("f"), "Show the head", queue_front::<E>),
    ])
}

pub(crate) fn stack_commands<E: Element>() -> CommandDefinitions<Stack<E>> {
    with_shared_commands::<E, _>(vec![
        one_arg("push", Some("p"), "Add a value on top", "value", push::<E>),
        no_args("pop", None, "Remove the top", pop::<E>),
        no_args("top", Some("t"), "Show the top", top::<E>),
    ])
}

pub(crate) fn deque_commands<E: Element>() -> CommandDefinitions<Deque<E>> {
    with_shared_commands::<E, _>(vec![
        one_arg("push-front", Some("pf"), "Add a value at the front", "value", push_front::<E>),
        one_arg("push-back", Some("pb"), "Add a value at the back", "value", push_back::<E>),
        no_args("pop-front", Some("of"), "Remove the front", pop_front::<E>),
        no_args("pop-back", Some("ob"), "Remove the back", pop_back::<E>),
        no_args("front", Some("f"), "Show the front", deque_front::<E>),
        no_args("back", Some("b"), "Show the back", deque_back::<E>),
        no_args("sort", None, "Sort ascending", sort::<E>),
    ])
}

fn show<E: Element, C: ContainerExt<E>>(
    _: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    Ok(Reply::Text(render(c.iter())))
}

fn len<E: Element, C: ContainerExt<E>>(
    _: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    Ok(Reply::Text(format!("Length: {}", c.len())))
}

fn get<E: Element, C: ContainerExt<E>>(
    args: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    let index = parse_index(args[0])?;
    Ok(Reply::Text(format!("Element: {}", c.get(index)?)))
}

fn contains<E: Element, C: ContainerExt<E>>(
    args: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    let value = E::parse(args[0])?;
    let answer = if c.contains(&value) { "yes" } else { "no" };
    Ok(Reply::Text(format!("Contains {}: {}", value, answer)))
}

fn map<E: Element, C: ContainerExt<E>>(
    _: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    let transforms = E::require_transforms("Map")?;
    let mapped = c.map(transforms.map);
    Ok(Reply::Text(format!(
        "Mapped ({}): {}",
        transforms.map_label,
        render(mapped.iter())
    )))
}

fn filter<E: Element, C: ContainerExt<E>>(
    _: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    let transforms = E::require_transforms("Where")?;
    let filtered = c.filter(transforms.predicate);
    Ok(Reply::Text(format!(
        "Filtered ({}): {}",
        transforms.where_label,
        render(filtered.iter())
    )))
}

fn split<E: Element, C: ContainerExt<E>>(
    _: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    let transforms = E::require_transforms("Split")?;
    let (matching, rest) = c.split(transforms.predicate);
    Ok(Reply::Text(format!(
        "Matching ({}): {}\nRest: {}",
        transforms.where_label,
        render(matching.iter()),
        render(rest.iter())
    )))
}

fn reduce<E: Element, C: ContainerExt<E>>(
    _: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    let transforms = E::require_transforms("Reduce")?;
    let sum = c.reduce(transforms.add, transforms.zero);
    Ok(Reply::Text(format!("Reduced sum: {}", sum)))
}

fn clear<E: Element, C: ContainerExt<E>>(
    _: &[&str],
    c: &mut C,
    _: &CommandDefinitions<C>,
) -> Outcome {
    c.clear();
    Ok(Reply::Text(render(c.iter())))
}

fn enqueue<E: Element>(
    args: &[&str],
    queue: &mut Queue<E>,
    _: &CommandDefinitions<Queue<E>>,
) -> Outcome {
    queue.enqueue(E::parse(args[0])?);
    Ok(Reply::Text(render(queue.iter())))
}

fn dequeue<E: Element>(
    _: &[&str],
    queue: &mut Queue<E>,
    _: &CommandDefinitions<Queue<E>>,
) -> Outcome {
    Ok(Reply::Text(format!("Dequeued: {}", queue.dequeue()?)))
}

fn queue_front<E: Element>(
    _: &[&str],
    queue: &mut Queue<E>,
    _: &CommandDefinitions<Queue<E>>,
) -> Outcome {
    Ok(Reply::Text(format!("Front: {}", queue.front()?)))
}

fn push<E: Element>(
    args: &[&str],
    stack: &mut Stack<E>,
    _: &CommandDefinitions<Stack<E>>,
) -> Outcome {
    stack.push(E::parse(args[0])?);
    Ok(Reply::Text(render(stack.iter())))
}

fn pop<E: Element>(_: &[&str], stack: &mut Stack<E>, _: &CommandDefinitions<Stack<E>>) -> Outcome {
    Ok(Reply::Text(format!("Popped: {}", stack.pop()?)))
}

fn top<E: Element>(_: &[&str], stack: &mut Stack<E>, _: &CommandDefinitions<Stack<E>>) -> Outcome {
    Ok(Reply::Text(format!("Top: {}", stack.top()?)))
}

fn push_front<E: Element>(
    args: &[&str],
    deque: &mut Deque<E>,
    _: &CommandDefinitions<Deque<E>>,
) -> Outcome {
    deque.push_front(E::parse(args[0])?);
    Ok(Reply::Text(render(deque.iter())))
}

fn push_back<E: Element>(
    args: &[&str],
    deque: &mut Deque<E>,
    _: &CommandDefinitions<Deque<E>>,
) -> Outcome {
    deque.push_back(E::parse(args[0])?);
    Ok(Reply::Text(render(deque.iter())))
}

fn pop_front<E: Element>(
    _: &[&str],
    deque: &mut Deque<E>,
    _: &CommandDefinitions<Deque<E>>,
) -> Outcome {
    Ok(Reply::Text(format!("Popped: {}", deque.pop_front()?)))
}

fn pop_back<E: Element>(
    _: &[&str],
    deque: &mut Deque<E>,
    _: &CommandDefinitions<Deque<E>>,
) -> Outcome {
    Ok(Reply::Text(format!("Popped: {}", deque.pop_back()?)))
}

fn deque_front<E: Element>(
    _: &[&str],
    deque: &mut Deque<E>,
    _: &CommandDefinitions<Deque<E>>,
) -> Outcome {
    Ok(Reply::Text(format!("Front: {}", deque.front()?)))
}

fn deque_back<E: Element>(
    _: &[&str],
    deque: &mut Deque<E>,
    _: &CommandDefinitions<Deque<E>>,
) -> Outcome {
    Ok(Reply::Text(format!("Back: {}", deque.back()?)))
}

fn sort<E: Element>(_: &[&str], deque: &mut Deque<E>, _: &CommandDefinitions<Deque<E>>) -> Outcome {
    deque.sort();
    Ok(Reply::Text(render(deque.iter())))
}

use std::fmt::Display;

use clap::ValueEnum;

use crate::error::CliError;

/// The element types a session can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ElementType {
    /// 64-bit signed integers
    Int,
    /// 64-bit floating point numbers
    Double,
    /// Single words
    String,
}

/// The fixed transforms offered by the `map`, `where` and `reduce` commands.
pub(crate) struct Transforms<E> {
    pub(crate) map_label: &'static str,
    pub(crate) map: fn(&E) -> E,
    pub(crate) where_label: &'static str,
    pub(crate) predicate: fn(&E) -> bool,
    pub(crate) zero: E,
    pub(crate) add: fn(E, &E) -> E,
}

/// An element type the command line can read and display.
pub(crate) trait Element: Clone + Display + PartialEq + PartialOrd + 'static {
    /// Name used in the `--element` flag
    const NAME: &'static str;

    fn parse(input: &str) -> Result<Self, CliError>;

    /// `None` when the element type has no built-in transforms.
    fn transforms() -> Option<Transforms<Self>>;

    /// The transforms, or an error naming the unsupported operation.
    fn require_transforms(operation: &'static str) -> Result<Transforms<Self>, CliError> {
        Self::transforms().ok_or(CliError::Unsupported(operation))
    }
}

impl Element for i64 {
    const NAME: &'static str = "int";

    fn parse(input: &str) -> Result<Self, CliError> {
        input.parse().map_err(|_| CliError::InvalidValue {
            expected: "an integer",
            input: input.to_string(),
        })
    }

    fn transforms() -> Option<Transforms<Self>> {
        Some(Transforms {
            map_label: "x * 2",
            map: |x| x.wrapping_mul(2),
            where_label: "even",
            predicate: |x| x % 2 == 0,
            zero: 0,
            add: |a, b| a.wrapping_add(*b),
        })
    }
}

impl Element for f64 {
    const NAME: &'static str = "double";

    fn parse(input: &str) -> Result<Self, CliError> {
        input.parse().map_err(|_| CliError::InvalidValue {
            expected: "a number",
            input: input.to_string(),
        })
    }

    fn transforms() -> Option<Transforms<Self>> {
        Some(Transforms {
            map_label: "x * 1.5",
            map: |x| x * 1.5,
            where_label: "x > 0",
            predicate: |x| *x > 0.0,
            zero: 0.0,
            add: |a, b| a + b,
        })
    }
}

impl Element for String {
    const NAME: &'static str = "string";

    fn parse(input: &str) -> Result<Self, CliError> {
        if input.is_empty() {
            return Err(CliError::InvalidValue {
                expected: "a non-empty string",
                input: String::new(),
            });
        }
        Ok(input.to_string())
    }

    fn transforms() -> Option<Transforms<Self>> {
        None
    }
}

/// Render elements as `[a, b, c]`.
pub(crate) fn render<'a, E: Element>(items: impl Iterator<Item = &'a E>) -> String {
    let items = items.map(|item| item.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

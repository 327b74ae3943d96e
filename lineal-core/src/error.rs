use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// The kind of failure raised by a collection operation.
///
/// The first paragraph of each variant's documentation is the human readable
/// message; the rest is a note explaining when it is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
pub enum ErrorKind {
    /// Immutable object
    ///
    /// A write was attempted through the subscript of an immutable sequence.
    Immutable,
    /// Index out of range
    ///
    /// The index lies outside the valid bounds for the operation.
    IndexOutOfRange,
    /// Invalid argument
    ///
    /// An argument was malformed in a way no more specific kind describes.
    InvalidArgument,
    /// Empty container
    ///
    /// First, last, pop, dequeue or remove was attempted on a structure
    /// without elements.
    EmptyContainer,
    /// Incompatible types
    ///
    /// Two sequences of different concrete variants were concatenated.
    IncompatibleTypes,
    /// Negative size not allowed
    ///
    /// A negative size was passed to a constructor or to resize.
    NegativeSize,
    /// Invalid range
    ///
    /// Range bounds are inconsistent: a negative start, an end beyond the
    /// length, or a start after the end.
    InvalidRange,
    /// Negative count
    ///
    /// A negative element count was passed to a constructor.
    NegativeCount,
    /// Null reference
    ///
    /// A required collaborator was absent.
    NullReference,
    /// Cannot concat sequences of different types
    ///
    /// The operands of a concatenation do not share a backing type.
    ConcatTypeMismatch,
}

impl ErrorKind {
    /// Attach a free-text detail to this kind.
    pub fn with_detail(self, detail: impl Into<String>) -> Error {
        Error {
            kind: self,
            detail: Some(detail.into()),
        }
    }

    /// The kind's code, which is the variant name.
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first.trim(), second.trim())
        } else {
            ("", "")
        }
    }
}

/// A collection error: a kind with an optional detail.
///
/// Errors are constructed where a precondition fails and returned to the
/// caller untouched; nothing in this crate downgrades or swallows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// What went wrong
    pub kind: ErrorKind,
    /// Optional free text, such as the offending index
    pub detail: Option<String>,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind, detail: None }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(detail) = &self.detail {
            write!(f, "{}: {}", self.kind.message(), detail)
        } else {
            write!(f, "{}", self.kind.message())
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert a signed position into an index below `len`.
pub(crate) fn checked_index(index: isize, len: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(ErrorKind::IndexOutOfRange.with_detail(format!("index {index} for length {len}"))),
    }
}

/// Convert a signed insertion position, which may equal `len`.
pub(crate) fn checked_position(index: isize, len: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i <= len => Ok(i),
        _ => Err(ErrorKind::IndexOutOfRange
            .with_detail(format!("insert position {index} for length {len}"))),
    }
}

/// Validate an inclusive `start..=end` range against `len`.
pub(crate) fn checked_range(start: isize, end: isize, len: usize) -> Result<(usize, usize)> {
    let fits = start >= 0 && start <= end && usize::try_from(end).is_ok_and(|end| end < len);
    if fits {
        Ok((start as usize, end as usize))
    } else {
        Err(ErrorKind::InvalidRange.with_detail(format!("from {start} to {end}")))
    }
}

use std::fmt;

/// Misuse of the context protocol by a game.
///
/// None of these are transient: each one means the game addressed the
/// identifier map in a way that would corrupt it, so the operation is refused
/// and the error is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// `Update`/`Remove`/rename on an identifier with no drawable.
    UnknownIdentifier(String),
    /// `Create` on an identifier that is already mapped.
    DuplicateIdentifier(String),
    /// `Create` with a config carrying the reserved `identifier` key.
    RenameInCreate(String),
    /// Rename onto an identifier that is already mapped.
    RenameCollision { from: String, to: String },
    /// The reserved `identifier` key holds something other than text.
    InvalidRename(String),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::UnknownIdentifier(id) => write!(f, "no drawable named {id:?}"),
            ContextError::DuplicateIdentifier(id) => write!(f, "drawable {id:?} already exists"),
            ContextError::RenameInCreate(id) => {
                write!(f, "cannot rename {id:?} while creating it")
            }
            ContextError::RenameCollision { from, to } => {
                write!(f, "cannot rename {from:?} to {to:?}: target already exists")
            }
            ContextError::InvalidRename(value) => {
                write!(f, "identifier attribute must be text, got {value}")
            }
        }
    }
}

impl std::error::Error for ContextError {}

use generational_arena::Index;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid tree shape: expected exactly one top-level key, found {keys}")]
    InvalidShape { keys: usize },

    #[error("Circular tree: node id {id} is reachable more than once")]
    CircularTree { id: String },

    #[error("Node not found in arena: {0:?}")]
    NodeNotFound(Index),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type TreeResult<T> = Result<T, TreeError>;

use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no node with id {0} in document")]
    UnknownNode(NodeId),
    #[error("node {0} is a text node and cannot receive events")]
    NotAnElement(NodeId),
}

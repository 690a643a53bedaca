use thiserror::Error;

/// Errors surfaced by a composed chain.
///
/// Render operations are total over well-formed inputs with one exception:
/// squashing a stateful inner renderable constructs a fresh instance on every
/// render call, and a state initializer that rejects the construction
/// attributes means the chain was built incorrectly. That failure must reach
/// the harness; swallowing it would corrupt measured render counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("state initializer for wrapper `{tag}` rejected construction attributes: {reason}")]
    StateInit { tag: String, reason: String },
}

impl ChainError {
    pub fn state_init(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        ChainError::StateInit {
            tag: tag.into(),
            reason: reason.into(),
        }
    }
}

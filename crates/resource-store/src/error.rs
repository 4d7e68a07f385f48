//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Record-specific failures travel inside
//! [`FrameworkError::EntityError`] and can be recovered with [`FrameworkError::into_entity`].

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers a hook error of type `E`, or hands back the original error.
    pub fn into_entity<E: std::error::Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of stock")]
    struct OutOfStock;

    #[test]
    fn test_into_entity_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(OutOfStock));
        assert_eq!(err.into_entity::<OutOfStock>().unwrap(), OutOfStock);
    }

    #[test]
    fn test_into_entity_passes_other_errors_through() {
        let err = FrameworkError::ActorClosed.into_entity::<OutOfStock>();
        assert!(matches!(err, Err(FrameworkError::ActorClosed)));

        let io = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        match io.into_entity::<OutOfStock>() {
            Err(FrameworkError::EntityError(inner)) => assert_eq!(inner.to_string(), "disk"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

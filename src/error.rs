pub type StripResult<T> = Result<T, StripError>;

#[derive(thiserror::Error, Debug)]
pub enum StripError {
    #[error("no input images supplied")]
    EmptyInput,

    #[error("invalid padding '{0}': expected a non-negative integer")]
    InvalidPadding(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StripError {
    pub fn invalid_padding(raw: impl Into<String>) -> Self {
        Self::InvalidPadding(raw.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            StripError::EmptyInput
                .to_string()
                .contains("no input images")
        );
        assert!(
            StripError::invalid_padding("abc")
                .to_string()
                .contains("invalid padding 'abc'")
        );
        assert!(
            StripError::validation("x")
                .to_string()
                .contains("validation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = StripError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}

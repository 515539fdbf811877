use crate::UNWRAP_PREFIX;

/// An accessor was used on the variant that does not support it.
///
/// The [`Display`](std::fmt::Display) output is the exact text the panicking
/// accessors panic with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// `expect` was called on an `Err`
    Expect { message: String },
    /// `expect_err` was called on an `Ok`
    ExpectErr { message: String },
    /// `unwrap` was called on an `Err`, `error` is the stringified payload
    Unwrap { error: String },
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expect { message } | Self::ExpectErr { message } => f.write_str(message),
            Self::Unwrap { error } => write!(f, "{UNWRAP_PREFIX}{error}"),
        }
    }
}

impl std::error::Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_panic_text() {
        let cases = [
            (
                AccessError::Expect {
                    message: String::from("expected number"),
                },
                "expected number",
            ),
            (
                AccessError::ExpectErr {
                    message: String::from("expected error"),
                },
                "expected error",
            ),
            (
                AccessError::Unwrap {
                    error: String::from(r#"{"key":"value"}"#),
                },
                r#"unwrap() called on Error: {"key":"value"}"#,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected)
        }
    }

    #[test]
    fn empty_message_is_kept() {
        let error = AccessError::Expect {
            message: String::new(),
        };
        assert_eq!(error.to_string(), "");
    }
}

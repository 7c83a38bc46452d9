use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The input was not a list of flat records. `row` is `None` when the
    /// top-level value itself is wrong.
    #[error("invalid input{}: {reason}", at_row(.row))]
    InputFormat { row: Option<usize>, reason: String },

    #[error("lead not found: {id}")]
    LeadNotFound { id: String },
}

#[allow(clippy::ref_option)]
fn at_row(row: &Option<usize>) -> String {
    row.map(|r| format!(" at row {r}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_format_message_includes_row_when_known() {
        let err = ExplorerError::InputFormat {
            row: Some(3),
            reason: "expected an object".into(),
        };
        assert_eq!(err.to_string(), "invalid input at row 3: expected an object");

        let err = ExplorerError::InputFormat {
            row: None,
            reason: "expected an array".into(),
        };
        assert_eq!(err.to_string(), "invalid input: expected an array");
    }
}

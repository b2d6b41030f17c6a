/// Error type for city-grid operations.
///
/// Grid arithmetic itself never fails; errors only come from building a
/// [`GridConfig`](crate::GridConfig).
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The configuration document could not be parsed or serialized.
    ConfigParse(String),
    /// East/west or north/south bounds are out of order or not finite.
    InvalidBounds(String),
    /// A longitude or latitude step is not a positive finite number.
    InvalidStep(String),
    /// The grid has zero columns or rows.
    InvalidGridSize(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::ConfigParse(msg) => write!(f, "Config parse error: {}", msg),
            GridError::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            GridError::InvalidStep(msg) => write!(f, "Invalid step: {}", msg),
            GridError::InvalidGridSize(msg) => write!(f, "Invalid grid size: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GridError::InvalidStep("lon_step must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid step: lon_step must be positive");
    }
}

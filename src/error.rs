//! Error types for grafo operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for grafo operations.
///
/// All errors are local, recoverable conditions reported to the caller.
/// No algorithm retries internally: given valid input every algorithm is
/// deterministic, so the caller decides whether to regenerate the graph or
/// retry with corrected parameters.
///
/// # Examples
///
/// ```
/// use grafo::error::GrafoError;
///
/// let err = GrafoError::InvalidVertex { vertex: 12, vertices: 10 };
/// assert!(err.to_string().contains("out of range"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrafoError {
    /// Start or query vertex lies outside `[0, vertices)`.
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertices: usize,
    },

    /// Invalid configuration parameter provided.
    InvalidConfiguration {
        /// Parameter name.
        param: &'static str,
        /// Provided value, rendered as a string.
        value: String,
        /// Constraint description.
        constraint: &'static str,
    },

    /// Input is structurally valid but degenerate for the requested
    /// operation (e.g. clustering an empty graph).
    DegenerateInput {
        /// Human-readable explanation.
        message: String,
    },
}

impl fmt::Display for GrafoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrafoError::InvalidVertex { vertex, vertices } => {
                write!(
                    f,
                    "vertex {vertex} out of range for graph with {vertices} vertices"
                )
            }
            GrafoError::InvalidConfiguration {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid configuration: {param} = {value}, must satisfy {constraint}"
                )
            }
            GrafoError::DegenerateInput { message } => {
                write!(f, "degenerate input: {message}")
            }
        }
    }
}

impl std::error::Error for GrafoError {}

/// Result type for grafo operations.
pub type Result<T> = std::result::Result<T, GrafoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vertex_display() {
        let err = GrafoError::InvalidVertex {
            vertex: 5,
            vertices: 3,
        };
        assert_eq!(
            err.to_string(),
            "vertex 5 out of range for graph with 3 vertices"
        );
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = GrafoError::InvalidConfiguration {
            param: "density",
            value: "1.5".to_string(),
            constraint: "0.0 <= density <= 1.0",
        };
        let msg = err.to_string();
        assert!(msg.contains("density"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_degenerate_input_display() {
        let err = GrafoError::DegenerateInput {
            message: "cannot cluster an empty graph".to_string(),
        };
        assert!(err.to_string().starts_with("degenerate input"));
    }
}

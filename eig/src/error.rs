use displaydoc::Display;

use crate::index_span::IndexSpan;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum RangeError {
    /// span {span} does not fit in an axis of extent {size}
    OutOfRange { span: IndexSpan, size: usize },
}

impl std::error::Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = RangeError::OutOfRange {
            span: IndexSpan::new(8, 3),
            size: 10,
        };
        assert_eq!(
            err.to_string(),
            "span (8, 3) does not fit in an axis of extent 10"
        );
    }
}

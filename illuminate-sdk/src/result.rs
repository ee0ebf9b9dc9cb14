//! Normalisation of positional call results.

/// A decoded call result after unwrapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwrapped<T> {
    /// The function returned exactly one value.
    Single(T),
    /// The function returned several values, in declaration order.
    Tuple(Vec<T>),
}

impl<T> Unwrapped<T> {
    pub fn into_single(self) -> Option<T> {
        match self {
            Unwrapped::Single(v) => Some(v),
            Unwrapped::Tuple(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Unwrapped::Single(v) => vec![v],
            Unwrapped::Tuple(values) => values,
        }
    }
}

/// Unwrap a positional result: nothing for an empty result, the bare value
/// for a single result, the full sequence otherwise.
pub fn unwrap<T>(mut values: Vec<T>) -> Option<Unwrapped<T>> {
    match values.len() {
        0 => None,
        1 => values.pop().map(Unwrapped::Single),
        _ => Some(Unwrapped::Tuple(values)),
    }
}

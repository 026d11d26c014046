/// Immutable payload wrapper for domain state types.
///
/// Wraps one value at construction and only hands out references; a store
/// holding a `State<P>` replaces the whole wrapper on every transition
/// instead of mutating the payload in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<T>(T);

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &T {
        &self.0
    }

    pub fn into_value(self) -> T {
        self.0
    }
}

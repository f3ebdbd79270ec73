/// Capability surface the ghost field needs from a host input element.
///
/// One adapter exists per element kind (plain buffer, terminal input,
/// editor line, …); the field never needs to know which.
pub trait ValueAccess {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: &str);
}

/// Plain in-memory buffer, the minimal host element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferValue {
    value: String,
}

impl BufferValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ValueAccess for BufferValue {
    fn value(&self) -> &str {
        self.value.as_str()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// Wraps another element and keeps a shadow copy of its value, for hosts
/// that must keep a hidden backing field in sync with the visible one.
#[derive(Debug, Clone, Default)]
pub struct Mirrored<A> {
    inner: A,
    mirror: String,
}

impl<A: ValueAccess> Mirrored<A> {
    pub fn new(inner: A) -> Self {
        let mirror = inner.value().to_string();
        Self { inner, mirror }
    }

    pub fn mirror(&self) -> &str {
        self.mirror.as_str()
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }

    /// Re-copy the visible value into the mirror. Hosts call this on input
    /// events that edit the element without going through `set_value`.
    pub fn sync(&mut self) {
        self.mirror = self.inner.value().to_string();
    }
}

impl<A: ValueAccess> ValueAccess for Mirrored<A> {
    fn value(&self) -> &str {
        self.inner.value()
    }

    fn set_value(&mut self, value: &str) {
        self.inner.set_value(value);
        self.mirror = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::{BufferValue, Mirrored, ValueAccess};

    #[test]
    fn buffer_round_trips_value() {
        let mut buffer = BufferValue::new("seed");
        assert_eq!(buffer.value(), "seed");
        buffer.set_value("grown");
        assert_eq!(buffer.value(), "grown");
    }

    #[test]
    fn mirrored_tracks_writes_and_syncs_edits() {
        let mut element = Mirrored::new(BufferValue::new("start"));
        assert_eq!(element.mirror(), "start");

        element.set_value("accepted");
        assert_eq!(element.value(), "accepted");
        assert_eq!(element.mirror(), "accepted");

        // Simulate a direct edit on the wrapped element.
        element.inner_mut().set_value("typed");
        assert_eq!(element.mirror(), "accepted");
        element.sync();
        assert_eq!(element.mirror(), "typed");
    }
}

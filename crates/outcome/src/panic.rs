use std::any::Any;

/// The payload of a panic captured by [`wrap`](crate::wrap) or
/// [`wrap_async`](crate::wrap_async).
///
/// The boxed payload is kept as it was raised, so it can be inspected with
/// [`Panic::downcast_ref`] or re-raised with [`Panic::resume`].
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, if the payload is a `&'static str` or a `String`.
    ///
    /// This is the case for every `panic!` invocation; payloads raised with
    /// [`std::panic::panic_any`] usually have no message.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref()
    }

    pub fn downcast<P: Any>(self) -> Result<Box<P>, Self> {
        self.payload.downcast().map_err(Self::new)
    }

    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl From<Box<dyn Any + Send + 'static>> for Panic {
    fn from(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self::new(payload)
    }
}

impl std::fmt::Debug for Panic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Panic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // same text the default panic hook prints for opaque payloads
        f.write_str(self.message().unwrap_or("Box<dyn Any>"))
    }
}

impl std::error::Error for Panic {}

impl serde::Serialize for Panic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

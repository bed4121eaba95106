use std::any::{type_name, Any, TypeId};
use std::fmt;

use serde::Deserialize;

/// A value decoded through a [`ResponseType`], recovered with `downcast`
pub type DynValue = Box<dyn Any + Send>;

/// Runtime descriptor of a response type
///
/// Lets callers that cannot name the target type statically (plugin
/// dispatch, reflection-style tables) still decode responses. The descriptor
/// parses JSON text straight into the concrete type, exactly as the typed
/// path does.
#[derive(Clone, Copy)]
pub struct ResponseType {
    name: &'static str,
    id: TypeId,
    from_json: fn(&str) -> serde_json::Result<DynValue>,
}

impl ResponseType {
    /// Describe `T`
    pub fn of<T>() -> Self
    where
        T: for<'de> Deserialize<'de> + Send + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
            from_json: decode_json::<T>,
        }
    }

    /// Fully qualified name of the described type
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this descriptor describes `T`
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Parse JSON text into the described type
    pub fn from_json(&self, text: &str) -> serde_json::Result<DynValue> {
        (self.from_json)(text)
    }
}

fn decode_json<T>(text: &str) -> serde_json::Result<DynValue>
where
    T: for<'de> Deserialize<'de> + Send + 'static,
{
    serde_json::from_str::<T>(text).map(|value| Box::new(value) as DynValue)
}

impl PartialEq for ResponseType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ResponseType {}

impl fmt::Debug for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResponseType").field(&self.name).finish()
    }
}

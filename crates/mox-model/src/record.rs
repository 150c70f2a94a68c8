//! Untyped wire records and the managed-object contract.

use serde::{Deserialize, Serialize};

use crate::path::ObjectPath;
use crate::property::{PropertyError, PropertyMap};

/// A record as exchanged with the managed system: a class identifier, a
/// path, and rendered properties.
///
/// Records are transient value objects — constructed, submitted, and
/// discarded. The remote system is the sole source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Class identifier on the remote schema.
    pub class_id: String,
    /// Address of the record in the object tree.
    pub path: ObjectPath,
    /// Rendered properties.
    pub properties: PropertyMap,
}

impl Record {
    /// Creates an empty record of the given class at the given path.
    #[must_use]
    pub fn new(class_id: impl Into<String>, path: ObjectPath) -> Self {
        Self {
            class_id: class_id.into(),
            path,
            properties: PropertyMap::new(),
        }
    }

    /// Looks up a rendered property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }
}

/// Contract implemented by every typed record.
///
/// A managed object knows its class, its address in the object tree, and
/// how to render itself into — and accept writes through — the open-ended
/// property form the remote system speaks.
pub trait ManagedObject {
    /// Remote class identifier.
    fn class_id(&self) -> &'static str;

    /// Address of this record in the object tree.
    fn path(&self) -> ObjectPath;

    /// Renders named fields plus extension properties.
    ///
    /// Extension properties are applied last and win on key collision.
    fn properties(&self) -> PropertyMap;

    /// Sets a property by key.
    ///
    /// A recognized key parses into the typed field; an unrecognized key
    /// lands in the extension map.
    ///
    /// ## Errors
    ///
    /// Returns [`PropertyError`] when a recognized key rejects its value.
    fn set_property(&mut self, key: &str, value: &str) -> Result<(), PropertyError>;

    /// Applies every entry of `props` through [`Self::set_property`].
    ///
    /// ## Errors
    ///
    /// Returns the first [`PropertyError`] encountered.
    fn apply(&mut self, props: &PropertyMap) -> Result<(), PropertyError> {
        for (key, value) in props.iter() {
            self.set_property(key, value)?;
        }
        Ok(())
    }

    /// Returns whether every expected entry matches the rendered properties.
    fn matches(&self, expected: &PropertyMap) -> bool {
        let props = self.properties();
        expected.iter().all(|(key, value)| props.get(key) == Some(value))
    }

    /// Converts to the untyped wire form.
    fn to_record(&self) -> Record {
        Record {
            class_id: self.class_id().to_string(),
            path: self.path(),
            properties: self.properties(),
        }
    }
}

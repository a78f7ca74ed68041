//! Action records and the tag-bearing shape shared by every action

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form metadata attached to an action
pub type Metadata = serde_json::Map<String, Value>;

/// An action whose payload has not been given a concrete type
///
/// This is what arrives from logs, channels or other untyped sources.
/// Use [`ActionCreator::narrow`](crate::ActionCreator::narrow) to recover the
/// typed form.
pub type RawAction = Action<Value>;

/// A typed message describing one state transition
///
/// Actions are built by an [`ActionCreator`](crate::ActionCreator) and are
/// plain values afterwards. Changing the factory namespace never rewrites
/// the tag of an action that already exists.
///
/// Serializes as `{ "type", "payload", "error"?, "meta"? }`. The `error` key
/// is omitted unless the action is flagged, and `meta` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action<P> {
    /// Namespace-qualified type tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Caller-supplied payload
    pub payload: P,
    /// Set when the creator classified this action as a failure
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
    /// Merged common and per-call metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl<P> Action<P> {
    /// Create an action with the given tag and payload, no error flag and no metadata
    pub fn new(kind: impl Into<String>, payload: P) -> Self {
        Self {
            kind: kind.into(),
            payload,
            error: false,
            meta: None,
        }
    }

    /// Erase the payload type, producing a [`RawAction`]
    pub fn into_raw(self) -> Result<RawAction, serde_json::Error>
    where
        P: Serialize,
    {
        Ok(Action {
            kind: self.kind,
            payload: serde_json::to_value(self.payload)?,
            error: self.error,
            meta: self.meta,
        })
    }
}

/// Anything that carries an action type tag
///
/// Implemented for [`Action`] and for raw JSON objects, so creators can test
/// values that were never built by this crate.
pub trait ActionLike {
    /// The current type tag, or `""` when the value has none
    fn action_type(&self) -> &str;

    /// Replace the type tag
    fn set_action_type(&mut self, action_type: String);
}

impl<P> ActionLike for Action<P> {
    fn action_type(&self) -> &str {
        &self.kind
    }

    fn set_action_type(&mut self, action_type: String) {
        self.kind = action_type;
    }
}

impl ActionLike for Value {
    fn action_type(&self) -> &str {
        self.get("type").and_then(Value::as_str).unwrap_or("")
    }

    fn set_action_type(&mut self, action_type: String) {
        if let Some(object) = self.as_object_mut() {
            object.insert("type".to_string(), Value::String(action_type));
        }
    }
}

/// Remove the leading `namespace/` segment from an action's type tag
///
/// The action is returned with its tag replaced by the segment after the
/// first `/`. Tags without a `/` are left alone. Only that one segment is
/// kept, so `"a/b/c"` becomes `"b"`.
///
/// # Example
///
/// ```
/// use action_factory_core::{strip_namespace, Action};
///
/// let action = strip_namespace(Action::new("todos/ADD", ()));
/// assert_eq!(action.kind, "ADD");
/// ```
pub fn strip_namespace<A: ActionLike>(mut action: A) -> A {
    let stripped = action.action_type().split('/').nth(1).map(str::to_owned);
    if let Some(action_type) = stripped {
        action.set_action_type(action_type);
    }
    action
}

//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for each state, the events it
//! accepts and where they lead. It maps one-to-one onto this JSON shape:
//!
//! ```json
//! {
//!   "initial": "A",
//!   "states": {
//!     "A": { "transitions": { "go": "B" } },
//!     "B": { "transitions": { "back": "A" } }
//!   }
//! }
//! ```
//!
//! The `states` object is read in document order, which becomes the order
//! reported by `StateMachine::states`.

use crate::core::Identifier;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod error;

pub use error::ConfigError;

/// One declared state and its outgoing transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct StateConfig<S: Identifier, E: Identifier> {
    /// State identifier
    pub id: S,

    /// Event → destination table
    pub transitions: HashMap<E, S>,
}

impl<S: Identifier, E: Identifier> StateConfig<S, E> {
    /// Create a state with no transitions.
    pub fn new(id: S) -> Self {
        Self {
            id,
            transitions: HashMap::new(),
        }
    }

    /// Add a transition, replacing any earlier destination for `event`.
    pub fn on(mut self, event: E, to: S) -> Self {
        self.transitions.insert(event, to);
        self
    }
}

/// Complete machine configuration.
///
/// # Example
///
/// ```rust
/// use rewind::config::MachineConfig;
///
/// let config: MachineConfig = MachineConfig::from_json(
///     r#"{
///         "initial": "A",
///         "states": {
///             "A": { "transitions": { "go": "B" } },
///             "B": { "transitions": { "back": "A" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "A");
/// assert_eq!(config.states[0].id, "A");
/// assert_eq!(config.states[1].id, "B");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, E: Serialize",
    deserialize = "S: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct MachineConfig<S: Identifier = String, E: Identifier = String> {
    /// State the machine starts in and returns to on reset
    pub initial: S,

    /// Declared states in declaration order
    #[serde(with = "ordered_states")]
    pub states: Vec<StateConfig<S, E>>,
}

impl<S: Identifier, E: Identifier> MachineConfig<S, E> {
    /// Create a configuration with no states declared yet.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            states: Vec::new(),
        }
    }

    /// Append a state declaration.
    pub fn state(mut self, state: StateConfig<S, E>) -> Self {
        self.states.push(state);
        self
    }

    /// Check that the initial state is declared.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.iter().any(|state| state.id == self.initial) {
            Ok(())
        } else {
            Err(ConfigError::UnknownInitialState {
                state: self.initial.label(),
            })
        }
    }
}

impl<S, E> MachineConfig<S, E>
where
    S: Identifier + DeserializeOwned,
    E: Identifier + DeserializeOwned,
{
    /// Parse a configuration from JSON text.
    ///
    /// The literal `null` means no configuration was supplied.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Option<Self> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.ok_or(ConfigError::Missing)
    }

    /// Convert an already-parsed JSON value into a configuration.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Option<Self> =
            serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.ok_or(ConfigError::Missing)
    }
}

impl<S, E> MachineConfig<S, E>
where
    S: Identifier + Serialize,
    E: Identifier + Serialize,
{
    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }
}

/// Serde adapter keeping the `states` object in document order.
mod ordered_states {
    use super::StateConfig;
    use crate::core::Identifier;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;
    use std::fmt;
    use std::marker::PhantomData;

    #[derive(Deserialize)]
    #[serde(bound(deserialize = "S: Deserialize<'de>, E: Deserialize<'de>"))]
    struct Body<S: Identifier, E: Identifier> {
        #[serde(default)]
        transitions: HashMap<E, S>,
    }

    #[derive(Serialize)]
    #[serde(bound(serialize = "S: Serialize, E: Serialize"))]
    struct BodyRef<'a, S: Identifier, E: Identifier> {
        transitions: &'a HashMap<E, S>,
    }

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, E, Z>(states: &Vec<StateConfig<S, E>>, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        S: Identifier + Serialize,
        E: Identifier + Serialize,
        Z: Serializer,
    {
        let mut map = serializer.serialize_map(Some(states.len()))?;
        for state in states {
            map.serialize_entry(
                &state.id,
                &BodyRef {
                    transitions: &state.transitions,
                },
            )?;
        }
        map.end()
    }

    pub fn deserialize<'de, S, E, D>(deserializer: D) -> Result<Vec<StateConfig<S, E>>, D::Error>
    where
        S: Identifier + Deserialize<'de>,
        E: Identifier + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StatesVisitor(PhantomData))
    }

    struct StatesVisitor<S, E>(PhantomData<fn() -> (S, E)>);

    impl<'de, S, E> Visitor<'de> for StatesVisitor<S, E>
    where
        S: Identifier + Deserialize<'de>,
        E: Identifier + Deserialize<'de>,
    {
        type Value = Vec<StateConfig<S, E>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of state ids to state definitions")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut states = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((id, body)) = access.next_entry::<S, Body<S, E>>()? {
                states.push(StateConfig {
                    id,
                    transitions: body.transitions,
                });
            }
            Ok(states)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PING_PONG: &str = r#"{
        "initial": "A",
        "states": {
            "A": { "transitions": { "go": "B" } },
            "B": { "transitions": { "back": "A" } }
        }
    }"#;

    #[test]
    fn parses_states_in_document_order() {
        let config: MachineConfig = MachineConfig::from_json(
            r#"{
                "initial": "Zeta",
                "states": {
                    "Zeta": { "transitions": {} },
                    "Alpha": { "transitions": {} },
                    "Mid": { "transitions": {} }
                }
            }"#,
        )
        .unwrap();

        let ids: Vec<_> = config.states.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn parses_transitions() {
        let config: MachineConfig = MachineConfig::from_json(PING_PONG).unwrap();

        assert_eq!(config.initial, "A");
        assert_eq!(
            config.states[0].transitions.get("go").map(String::as_str),
            Some("B")
        );
        assert_eq!(
            config.states[1].transitions.get("back").map(String::as_str),
            Some("A")
        );
    }

    #[test]
    fn missing_transitions_key_means_none() {
        let config: MachineConfig =
            MachineConfig::from_json(r#"{ "initial": "A", "states": { "A": {} } }"#).unwrap();

        assert!(config.states[0].transitions.is_empty());
    }

    #[test]
    fn null_is_missing_configuration() {
        let result = MachineConfig::<String, String>::from_json("null");
        assert_eq!(result, Err(ConfigError::Missing));

        let result = MachineConfig::<String, String>::from_value(serde_json::Value::Null);
        assert_eq!(result, Err(ConfigError::Missing));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = MachineConfig::<String, String>::from_json("{ \"initial\": ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = MachineConfig::<String, String>::from_json(r#"{ "states": {} }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn validate_rejects_undeclared_initial() {
        let config: MachineConfig<&str, &str> =
            MachineConfig::new("Missing").state(StateConfig::new("A"));

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownInitialState {
                state: "Missing".to_string()
            })
        );
    }

    #[test]
    fn json_output_keeps_declaration_order() {
        let config: MachineConfig = MachineConfig::new("Z".to_string())
            .state(StateConfig::new("Z".to_string()).on("next".to_string(), "A".to_string()))
            .state(StateConfig::new("A".to_string()));

        let json = config.to_json().unwrap();
        let z = json.find("\"Z\": {").unwrap();
        let a = json.find("\"A\": {").unwrap();
        assert!(z < a);

        let reparsed: MachineConfig = MachineConfig::from_json(&json).unwrap();
        assert_eq!(reparsed, config);
    }
}

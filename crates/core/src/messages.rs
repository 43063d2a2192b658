//! Keyed string table for user-facing labels and messages.
//!
//! Every label the commands print is looked up by a stable message id. The
//! built-in English table can be overridden entry by entry from the site
//! definition. Messages may contain `{name}` placeholders which are rendered
//! with `leon`.

use std::collections::HashMap;

use leon::Template;

use crate::error::Result;

/// Stable message ids.
pub mod keys {
    pub const DEBUG_SERVICE_ID: &str = "commands.container.debug.messages.service_id";
    pub const DEBUG_CLASS_NAME: &str = "commands.container.debug.messages.class_name";
    pub const DEBUG_SERVICE: &str = "commands.container.debug.messages.service";
    pub const DEBUG_CLASS: &str = "commands.container.debug.messages.class";
    pub const DEBUG_INTERFACE: &str = "commands.container.debug.messages.interface";
    pub const DEBUG_PARENT: &str = "commands.container.debug.messages.parent";
    pub const DEBUG_VARIABLES: &str = "commands.container.debug.messages.variables";
    pub const DEBUG_METHODS: &str = "commands.container.debug.messages.methods";

    pub const NODES_QUESTION_CONTENT_TYPE: &str = "commands.create.nodes.questions.content-type";
    pub const NODES_QUESTION_LIMIT: &str = "commands.create.nodes.questions.limit";
    pub const NODES_QUESTION_TITLE_WORDS: &str = "commands.create.nodes.questions.title-words";
    pub const NODES_QUESTION_TIME_RANGE: &str = "commands.create.nodes.questions.time-range";
    pub const NODES_TIME_RANGES: [&str; 6] = [
        "commands.create.nodes.questions.time-ranges.0",
        "commands.create.nodes.questions.time-ranges.1",
        "commands.create.nodes.questions.time-ranges.2",
        "commands.create.nodes.questions.time-ranges.3",
        "commands.create.nodes.questions.time-ranges.4",
        "commands.create.nodes.questions.time-ranges.5",
    ];

    pub const NODES_NODE_ID: &str = "commands.create.nodes.messages.node-id";
    pub const NODES_CONTENT_TYPE: &str = "commands.create.nodes.messages.content-type";
    pub const NODES_TITLE: &str = "commands.create.nodes.messages.title";
    pub const NODES_CREATED: &str = "commands.create.nodes.messages.created";
    pub const NODES_GENERATED: &str = "commands.create.nodes.messages.generated-content";
    pub const NODES_FAILED: &str = "commands.create.nodes.messages.failed-content";
}

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (keys::DEBUG_SERVICE_ID, "Service ID"),
    (keys::DEBUG_CLASS_NAME, "Class Name"),
    (keys::DEBUG_SERVICE, "Service"),
    (keys::DEBUG_CLASS, "Class"),
    (keys::DEBUG_INTERFACE, "Interface(s)"),
    (keys::DEBUG_PARENT, "Parent class"),
    (keys::DEBUG_VARIABLES, "Variables"),
    (keys::DEBUG_METHODS, "Methods"),
    (
        keys::NODES_QUESTION_CONTENT_TYPE,
        "Select content type(s) to be used on node generation",
    ),
    (
        keys::NODES_QUESTION_LIMIT,
        "Enter how many nodes would you like to generate",
    ),
    (
        keys::NODES_QUESTION_TITLE_WORDS,
        "Enter the number of words in titles",
    ),
    (
        keys::NODES_QUESTION_TIME_RANGE,
        "How far back in time should the nodes be dated",
    ),
    ("commands.create.nodes.questions.time-ranges.0", "Now"),
    ("commands.create.nodes.questions.time-ranges.1", "Past hour"),
    ("commands.create.nodes.questions.time-ranges.2", "Past day"),
    ("commands.create.nodes.questions.time-ranges.3", "Past week"),
    ("commands.create.nodes.questions.time-ranges.4", "Past month"),
    ("commands.create.nodes.questions.time-ranges.5", "Past year"),
    (keys::NODES_NODE_ID, "Node Id"),
    (keys::NODES_CONTENT_TYPE, "Content type"),
    (keys::NODES_TITLE, "Title"),
    (keys::NODES_CREATED, "Created"),
    (keys::NODES_GENERATED, "{count} node(s) generated successfully."),
    (keys::NODES_FAILED, "{count} node(s) could not be created."),
];

/// Message lookup table.
#[derive(Debug, Clone)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Default for Messages {
    fn default() -> Self {
        let entries = DEFAULT_MESSAGES
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();

        Self { entries }
    }
}

impl Messages {
    /// Builds the table from the built-in defaults, replacing any entry present
    /// in `overrides`.
    #[must_use]
    pub fn with_overrides(overrides: Option<&HashMap<String, String>>) -> Self {
        let mut messages = Self::default();

        if let Some(overrides) = overrides {
            for (key, value) in overrides {
                messages.entries.insert(key.clone(), value.clone());
            }
        }

        messages
    }

    /// Looks up a message. Unknown ids resolve to the id itself.
    #[must_use]
    pub fn trans(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Looks up a message and renders its `{name}` placeholders.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is not a valid template or references
    /// a placeholder missing from `values`.
    pub fn format(&self, key: &str, values: &[(&str, String)]) -> Result<String> {
        let message = self.trans(key);
        let template = Template::parse(&message)?;

        let context: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect();

        Ok(template.render(&context)?)
    }
}

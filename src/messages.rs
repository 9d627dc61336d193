use std::collections::HashMap;

/// Success message codes sent by the server and their display text
const SUCCESS_MESSAGES: &[(&str, &str)] = &[
    ("MSG-0001", "Site added successfully"),
    ("MSG-0002", "New location added successfully"),
    ("MSG-0007", "Location updated successfully"),
    ("MSG-0010", "Get user profile successfully"),
    ("MSG-0011", "Profile updated successfully"),
    ("MSG-0014", "Site Decommissioned successfully"),
    ("MSG-0015", "Site Recommissioned successfully"),
    ("MSG-0016", "Participants are invited"),
    ("MSG-0017", "Participant added successfully"),
    (
        "MSG-0022",
        "The email is accepted by the receiving mail server.",
    ),
    ("MSG-0024", "New user added successfully"),
    ("MSG-0025", "User updated successfully"),
    ("MSG-0026", "Participants imported successfully"),
    ("MSG-0028", "Status updated successfully"),
    ("MSG-0031", "New account added successfully"),
    ("MSG-0032", "Your password has been changed successfully"),
];

/// Lookup of server message codes to user visible text
#[derive(Clone, Debug)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            messages: SUCCESS_MESSAGES
                .iter()
                .map(|(code, message)| (code.to_string(), message.to_string()))
                .collect(),
        }
    }
}

impl MessageCatalog {
    /// Catalog without any entries
    pub fn empty() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// Add or replace the message of `code`
    pub fn with_message(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(code.into(), message.into());
        self
    }

    /// Message for `code`, if the code is known and its message not empty
    pub fn message_for(&self, code: &str) -> Option<&str> {
        self.messages
            .get(code)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }
}

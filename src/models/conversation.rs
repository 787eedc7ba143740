use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Customer,
    Agent,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Customer => "Customer",
            Speaker::Agent => "Agent",
        }
    }
}

/// One message in a customer's transcript. Transcripts are appended by the
/// messaging side; the dashboard only reads and renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(rename = "type")]
    pub speaker: Speaker,
    pub message: String,
}

impl ConversationTurn {
    /// The message is either plain text or a JSON envelope whose `text`
    /// field carries the displayable content. Anything that fails to decode
    /// as such an envelope is shown as-is.
    pub fn display_text(&self) -> String {
        if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(&self.message) {
            if let Some(serde_json::Value::String(text)) = map.get("text") {
                return text.clone();
            }
        }
        self.message.clone()
    }
}

/// Failure arm of every bridge call. Each variant carries the message the
/// caller should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    Network(String),
    Status(String),
    Parse(String),
}

impl BridgeError {
    pub fn message(&self) -> &str {
        match self {
            BridgeError::Network(m) | BridgeError::Status(m) | BridgeError::Parse(m) => m,
        }
    }
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BridgeError::Network(e) => write!(f, "Network error: {}", e),
            BridgeError::Status(e) => write!(f, "Status error: {}", e),
            BridgeError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Renders `err` followed by its source chain, e.g. `error sending request:
/// client error (Connect): Connection refused`. Falls back to `fallback` when
/// nothing printable is left.
pub fn message_or<E: std::error::Error>(err: E, fallback: &str) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.trim().is_empty() && !message.contains(&text) {
            if !message.trim().is_empty() {
                message.push_str(": ");
            }
            message.push_str(&text);
        }
        source = cause.source();
    }

    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

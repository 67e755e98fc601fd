//! Transport configuration

/// Credentials and identity for a pub/sub transport
///
/// The publish and subscribe keys are the static key pair of the managed
/// bus; the client identifier names this device on the bus and must be in
/// place before the first subscribe, which is why it lives here rather than
/// on any operation.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Key presented when publishing
    pub publish_key: String,

    /// Key presented when subscribing
    pub subscribe_key: String,

    /// Stable identifier for this client on the bus
    pub client_id: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            publish_key: "demo".to_string(),
            subscribe_key: "demo".to_string(),
            client_id: "phue-rs".to_string(),
        }
    }
}

impl TransportConfig {
    /// Create a config from a key pair, keeping the default client id
    pub fn new(publish_key: impl Into<String>, subscribe_key: impl Into<String>) -> Self {
        Self {
            publish_key: publish_key.into(),
            subscribe_key: subscribe_key.into(),
            ..Default::default()
        }
    }

    /// Set the publish key
    pub fn publish_key(mut self, key: impl Into<String>) -> Self {
        self.publish_key = key.into();
        self
    }

    /// Set the subscribe key
    pub fn subscribe_key(mut self, key: impl Into<String>) -> Self {
        self.subscribe_key = key.into();
        self
    }

    /// Set the client identifier
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransportConfig::default();

        assert_eq!(config.publish_key, "demo");
        assert_eq!(config.subscribe_key, "demo");
        assert_eq!(config.client_id, "phue-rs");
    }

    #[test]
    fn test_new_keeps_default_client_id() {
        let config = TransportConfig::new("pub-key", "sub-key");

        assert_eq!(config.publish_key, "pub-key");
        assert_eq!(config.subscribe_key, "sub-key");
        assert_eq!(config.client_id, "phue-rs");
    }

    #[test]
    fn test_builder_chaining() {
        let config = TransportConfig::default()
            .publish_key("pub-c-1234")
            .subscribe_key("sub-c-5678")
            .client_id("lamp-remote");

        assert_eq!(config.publish_key, "pub-c-1234");
        assert_eq!(config.subscribe_key, "sub-c-5678");
        assert_eq!(config.client_id, "lamp-remote");
    }
}

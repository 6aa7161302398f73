use crate::wallet::Connector;

/// Mobile-vs-desktop classification of the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Mobile,
    Desktop,
}

impl Device {
    /// Wire tag understood by the explorer service.
    pub fn as_str(self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Desktop => "desktop",
        }
    }
}

/// Host environment as reported by the platform probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub device: Device,
    /// Whether a browser-injected wallet provider was detected.
    pub injected_provider: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            device: Device::Desktop,
            injected_provider: false,
        }
    }
}

/// Allow/deny policy over explorer listing ids. An empty list is inactive;
/// the allow list restricts before the deny list removes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Policy {
    pub allow_list: Vec<String>,
    pub deny_list: Vec<String>,
}

/// Read-only directory configuration for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub policy: Policy,
    /// Chain filter forwarded to the explorer service.
    pub chains: Vec<String>,
    /// Protocol version tag forwarded to the explorer service.
    pub protocol_version: u32,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            chains: Vec::new(),
            protocol_version: 1,
        }
    }
}

/// Connectors registered with an attached wallet client. Standalone mode is
/// the absence of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientSession {
    connectors: Vec<Connector>,
}

impl ClientSession {
    pub fn new(connectors: Vec<Connector>) -> Self {
        Self { connectors }
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Looks up a registered connector. A miss means the dependent UI
    /// affordance is unavailable, not an error.
    pub fn connector_by_id(&self, id: &str) -> Option<&Connector> {
        self.connectors.iter().find(|connector| connector.id == id)
    }
}

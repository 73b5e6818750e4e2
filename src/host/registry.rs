use super::HostAdapter;
use std::collections::HashMap;

/// Picks the adapter for the page the user is on, by hostname
pub struct HostRegistry {
    /// Domain -> adapter
    map: HashMap<String, Box<dyn HostAdapter>>,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register an adapter under its own domain, replacing any previous one
    pub fn register(&mut self, adapter: impl HostAdapter + 'static) {
        self.map
            .insert(adapter.domain().to_lowercase(), Box::new(adapter));
    }

    /// Select the adapter for a host such as "chat.openai.com" or
    /// "www.poe.com:443". Ports and a leading "www." are ignored.
    pub fn select(&self, host: &str) -> Option<&dyn HostAdapter> {
        let host = normalize_host(host);
        self.map.get(&host).map(|a| &**a)
    }

    pub fn adapter_count(&self) -> usize {
        self.map.len()
    }

    pub fn registered_domains(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.map.keys().map(|s| s.as_str()).collect();
        domains.sort_unstable();
        domains
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim().to_lowercase();
    let host = host.split(':').next().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

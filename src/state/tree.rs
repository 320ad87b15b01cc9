//! Tree Projection
//!
//! Ordered forest of service nodes, each holding its username nodes.
//! Labels keep their original case; lookups ignore it.

use indexmap::IndexMap;

/// Service name -> ordered usernames, as persisted in the mirror file.
pub type MirrorDocument = IndexMap<String, Vec<String>>;

/// A node of the tree, addressed by its labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Service(String),
    Username { service: String, username: String },
}

impl Selection {
    #[cfg(test)]
    pub fn label(&self) -> &str {
        match self {
            Self::Service(service) => service,
            Self::Username { username, .. } => username,
        }
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ServiceNode {
    label: String,
    usernames: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeProjection {
    services: Vec<ServiceNode>,
}

fn same_label(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl TreeProjection {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    #[cfg(test)]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    fn service_index(&self, service: &str) -> Option<usize> {
        self.services.iter().position(|node| same_label(&node.label, service))
    }

    /// Stored label of a service, if present.
    #[cfg(test)]
    pub fn find_service(&self, service: &str) -> Option<&str> {
        self.service_index(service).map(|i| self.services[i].label.as_str())
    }

    #[cfg(test)]
    pub fn contains(&self, service: &str, username: &str) -> bool {
        self.service_index(service).is_some_and(|i| {
            self.services[i].usernames.iter().any(|u| same_label(u, username))
        })
    }

    /// Insert a username under a service, creating the service when missing.
    /// Returns `true` if the tree changed.
    pub fn add_username(&mut self, service: &str, username: &str) -> bool {
        let index = match self.service_index(service) {
            Some(i) => i,
            None => {
                self.services.push(ServiceNode {
                    label: service.to_string(),
                    usernames: Vec::new(),
                });
                self.services.len() - 1
            }
        };

        let node = &mut self.services[index];
        if node.usernames.iter().any(|u| same_label(u, username)) {
            return false;
        }
        node.usernames.push(username.to_string());
        true
    }

    /// Remove every matching username under a service. A service left
    /// without usernames is removed as well. Returns `true` if the tree changed.
    pub fn remove_username(&mut self, service: &str, username: &str) -> bool {
        let Some(index) = self.service_index(service) else {
            return false;
        };

        let node = &mut self.services[index];
        let before = node.usernames.len();
        node.usernames.retain(|u| !same_label(u, username));
        let changed = node.usernames.len() != before;

        if node.usernames.is_empty() {
            self.services.remove(index);
            return true;
        }
        changed
    }

    pub fn export(&self) -> MirrorDocument {
        self.services
            .iter()
            .map(|node| (node.label.clone(), node.usernames.clone()))
            .collect()
    }

    pub fn import(&mut self, doc: &MirrorDocument) {
        for (service, usernames) in doc {
            for username in usernames {
                self.add_username(service, username);
            }
        }
    }

    /// Depth-first listing of every node, services followed by their usernames.
    pub fn rows(&self) -> Vec<Selection> {
        let mut rows = Vec::new();
        for node in &self.services {
            rows.push(Selection::Service(node.label.clone()));
            rows.extend(node.usernames.iter().map(|username| Selection::Username {
                service: node.label.clone(),
                username: username.clone(),
            }));
        }
        rows
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use crate::{AccountProvider, ListenSource, PinService};

pub struct Services {
    pins: HashMap<String, Arc<dyn PinService>>,
    listens: HashMap<String, Arc<dyn ListenSource>>,
    accounts: HashMap<String, Arc<dyn AccountProvider>>,
    default_pins: Option<String>,
    default_listens: Option<String>,
    default_accounts: Option<String>,
}

impl Services {
    pub fn pins(&self, id: Option<&str>) -> Option<&Arc<dyn PinService>> {
        let key = id.or(self.default_pins.as_deref())?;
        self.pins.get(key)
    }

    pub fn listens(&self, id: Option<&str>) -> Option<&Arc<dyn ListenSource>> {
        let key = id.or(self.default_listens.as_deref())?;
        self.listens.get(key)
    }

    pub fn accounts(&self, id: Option<&str>) -> Option<&Arc<dyn AccountProvider>> {
        let key = id.or(self.default_accounts.as_deref())?;
        self.accounts.get(key)
    }
}

pub struct ServicesBuilder {
    pins: HashMap<String, Arc<dyn PinService>>,
    listens: HashMap<String, Arc<dyn ListenSource>>,
    accounts: HashMap<String, Arc<dyn AccountProvider>>,
    default_pins: Option<String>,
    default_listens: Option<String>,
    default_accounts: Option<String>,
}

impl ServicesBuilder {
    pub fn new() -> Self {
        Self {
            pins: HashMap::new(),
            listens: HashMap::new(),
            accounts: HashMap::new(),
            default_pins: None,
            default_listens: None,
            default_accounts: None,
        }
    }

    pub fn add_pins(mut self, service: impl PinService + 'static) -> Self {
        let id = service.id().to_string();
        if self.default_pins.is_none() {
            self.default_pins = Some(id.clone());
        }
        self.pins.insert(id, Arc::new(service));
        self
    }

    pub fn add_listens(mut self, source: impl ListenSource + 'static) -> Self {
        let id = source.id().to_string();
        if self.default_listens.is_none() {
            self.default_listens = Some(id.clone());
        }
        self.listens.insert(id, Arc::new(source));
        self
    }

    pub fn add_accounts(mut self, provider: impl AccountProvider + 'static) -> Self {
        let id = provider.id().to_string();
        if self.default_accounts.is_none() {
            self.default_accounts = Some(id.clone());
        }
        self.accounts.insert(id, Arc::new(provider));
        self
    }

    pub fn build(self) -> Result<Services, &'static str> {
        if self.pins.is_empty() {
            return Err("at least one pin service required");
        }
        if self.listens.is_empty() {
            return Err("at least one listen source required");
        }
        if self.accounts.is_empty() {
            return Err("at least one account provider required");
        }

        Ok(Services {
            pins: self.pins,
            listens: self.listens,
            accounts: self.accounts,
            default_pins: self.default_pins,
            default_listens: self.default_listens,
            default_accounts: self.default_accounts,
        })
    }
}

impl Default for ServicesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;
    use shared::{
        listen::{Listen, PinnedRecording},
        pin::PinRequest,
    };

    struct Fake(&'static str);

    #[async_trait]
    impl PinService for Fake {
        fn id(&self) -> &'static str {
            self.0
        }
        fn name(&self) -> &'static str {
            "Fake"
        }
        async fn submit_pin(&self, _token: &str, _request: &PinRequest) -> Result<u16> {
            Ok(200)
        }
        async fn unpin(&self, _token: &str) -> Result<u16> {
            Ok(200)
        }
        async fn current_pin(&self, _user_name: &str) -> Result<Option<PinnedRecording>> {
            Ok(None)
        }
    }

    #[async_trait]
    impl ListenSource for Fake {
        fn id(&self) -> &'static str {
            self.0
        }
        fn name(&self) -> &'static str {
            "Fake"
        }
        async fn recent_listens(&self, _user_name: &str, _count: usize) -> Result<Vec<Listen>> {
            Ok(vec![])
        }
    }

    #[async_trait]
    impl AccountProvider for Fake {
        fn id(&self) -> &'static str {
            self.0
        }
        fn name(&self) -> &'static str {
            "Fake"
        }
        async fn validate_token(&self, _token: &str) -> Result<String> {
            Ok("someone".to_string())
        }
    }

    #[test]
    fn build_requires_every_kind() {
        let err = ServicesBuilder::new().add_pins(Fake("a")).build().err();
        assert_eq!(err, Some("at least one listen source required"));
    }

    #[test]
    fn lookups_fall_back_to_first_added() {
        let services = ServicesBuilder::new()
            .add_pins(Fake("first"))
            .add_pins(Fake("second"))
            .add_listens(Fake("source"))
            .add_accounts(Fake("accounts"))
            .build()
            .unwrap();

        assert_eq!(services.pins(None).map(|p| p.id()), Some("first"));
        assert_eq!(services.pins(Some("second")).map(|p| p.id()), Some("second"));
        assert!(services.pins(Some("missing")).is_none());
        assert_eq!(services.listens(None).map(|l| l.id()), Some("source"));
        assert_eq!(services.accounts(None).map(|a| a.id()), Some("accounts"));
    }
}

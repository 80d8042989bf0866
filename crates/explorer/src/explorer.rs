use tokio::sync::Mutex;

use crate::{
    Completion, ExplorerConfig, InvalidOrderId, OrderClient, Panel, ResponsePolicy, Session,
    ViewState,
};

/// Wires fetch completions into a [`Session`].
///
/// The session lock is never held across the request, so searches may
/// overlap; how their responses land is up to the session's
/// [`ResponsePolicy`].
pub struct Explorer {
    client: OrderClient,
    session: Mutex<Session>,
}

impl Explorer {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self::with_client(OrderClient::new(config), config.policy)
    }

    pub fn with_client(client: OrderClient, policy: ResponsePolicy) -> Self {
        Self {
            client,
            session: Mutex::new(Session::new(policy)),
        }
    }

    /// Looks up `query` and applies the outcome. A fetch failure is not an
    /// error here; it shows up as [`crate::Phase::NotFound`].
    pub async fn submit(&self, query: &str) -> Result<Completion, InvalidOrderId> {
        let ticket = self.session.lock().await.begin_search(query)?;

        let outcome = self.client.search(query).await;

        Ok(self.session.lock().await.complete(ticket, outcome))
    }

    pub async fn set_query(&self, query: &str) {
        self.session.lock().await.set_query(query);
    }

    pub async fn reset(&self) {
        self.session.lock().await.reset();
    }

    pub async fn toggle(&self, panel: Panel) -> bool {
        self.session.lock().await.toggle(panel)
    }

    pub async fn view(&self) -> ViewState {
        self.session.lock().await.view().clone()
    }
}

use crate::notify::ToastQueue;
use crate::store::PortfolioStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything one page session owns: the store plus toasts awaiting display.
#[derive(Debug, Default)]
pub struct Portfolio {
    pub store: PortfolioStore,
    pub toasts: ToastQueue,
}

#[derive(Clone, Default)]
pub struct AppState {
    pub portfolio: Arc<Mutex<Portfolio>>,
}

impl AppState {
    pub fn new(store: PortfolioStore) -> Self {
        Self {
            portfolio: Arc::new(Mutex::new(Portfolio {
                store,
                toasts: ToastQueue::default(),
            })),
        }
    }
}

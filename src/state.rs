use std::sync::Arc;

use crate::db::store::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(store: SharedStore, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.into(),
        }
    }
}

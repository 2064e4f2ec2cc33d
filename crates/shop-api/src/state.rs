use std::sync::Arc;

use shop_core::repositories::{NavigationRepository, PageRepository, StoreRepository};
use shop_core::services::NavigationService;
use shop_security::JwtService;

pub type DynNavigationService =
    NavigationService<dyn NavigationRepository, dyn PageRepository, dyn StoreRepository>;

#[derive(Clone)]
pub struct AppState {
    pub navigation: Arc<DynNavigationService>,
    pub jwt: Arc<JwtService>,
}

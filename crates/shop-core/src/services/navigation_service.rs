// ============================================================================
// Shop Core - Navigation Service
// File: crates/shop-core/src/services/navigation_service.rs
// ============================================================================
//! Storefront navigation menu: public rendering, owner editing, add/remove
//! of linked pages, and saving the edited order.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use shop_shared::constants::NAV_TITLE_MAX_CHARS;
use shop_shared::utils::{page_url, truncate_title};

use crate::domain::{FlatNavItem, NavItem, NavNode, Page, Store};
use crate::error::DomainError;
use crate::navigation::{build_tree, map_placements, NavEditor, PlacementPlan};
use crate::repositories::{NavigationRepository, PageRepository, StoreRepository};

/// Navigation menu service
pub struct NavigationService<N: ?Sized, P: ?Sized, S: ?Sized> {
    nav_repo: Arc<N>,
    page_repo: Arc<P>,
    store_repo: Arc<S>,
    max_depth: usize,
}

impl<N, P, S> NavigationService<N, P, S>
where
    N: NavigationRepository + ?Sized,
    P: PageRepository + ?Sized,
    S: StoreRepository + ?Sized,
{
    pub fn new(nav_repo: Arc<N>, page_repo: Arc<P>, store_repo: Arc<S>, max_depth: usize) -> Self {
        Self {
            nav_repo,
            page_repo,
            store_repo,
            max_depth,
        }
    }

    /// Public storefront menu with resolved page URLs.
    ///
    /// An item whose page is gone or unpublished is hidden with its subtree.
    pub async fn menu(&self, store_id: &Uuid) -> Result<Vec<MenuLink>, DomainError> {
        let store = self.store_repo.find_by_id(store_id).await?
            .ok_or(DomainError::StoreNotFound)?;

        let items = self.nav_repo.list_by_store(store_id).await?;
        let pages: HashMap<Uuid, Page> = self.page_repo.list_by_store(store_id).await?
            .into_iter()
            .filter(|p| p.is_published)
            .map(|p| (p.id, p))
            .collect();

        Ok(to_links(&build_tree(items), &store, &pages))
    }

    /// Editing session for the store owner
    pub async fn editor(&self, store_id: &Uuid, owner_id: &Uuid) -> Result<NavEditor, DomainError> {
        self.authorize(store_id, owner_id).await?;
        let items = self.nav_repo.list_by_store(store_id).await?;
        Ok(NavEditor::from_items(items, self.max_depth))
    }

    /// Pages of the store that the menu does not link yet
    pub async fn available_pages(&self, store_id: &Uuid, owner_id: &Uuid) -> Result<Vec<Page>, DomainError> {
        let editor = self.editor(store_id, owner_id).await?;
        let pages = self.page_repo.list_by_store(store_id).await?;
        Ok(editor.available_pages(&pages).into_iter().cloned().collect())
    }

    /// Link a page at the end of the top level
    pub async fn add_item(
        &self,
        store_id: &Uuid,
        owner_id: &Uuid,
        page_id: &Uuid,
        title: Option<&str>,
    ) -> Result<NavItem, DomainError> {
        self.authorize(store_id, owner_id).await?;

        let page = self.page_repo.find_by_id(store_id, page_id).await?
            .ok_or(DomainError::PageNotFound(*page_id))?;

        if self.nav_repo.find_by_page(store_id, page_id).await?.is_some() {
            warn!("Page {} already linked in navigation of store {}", page_id, store_id);
            return Err(DomainError::PageAlreadyLinked(*page_id));
        }

        let position = self.nav_repo.max_position(store_id).await?
            .map_or(0, |max| max + 1);
        // Page titles may be longer than a menu label allows
        let title = match title.filter(|t| !t.trim().is_empty()) {
            Some(custom) => custom.to_string(),
            None => truncate_title(&page.title, NAV_TITLE_MAX_CHARS),
        };

        let item = NavItem::new(*store_id, page.id, &title, position)?;
        let created = self.nav_repo.create(&item).await?;

        info!("Navigation item {} added for page {} in store {}", created.id, page_id, store_id);
        Ok(created)
    }

    /// Remove an item; its direct children move to the top level
    pub async fn remove_item(&self, store_id: &Uuid, owner_id: &Uuid, item_id: &Uuid) -> Result<(), DomainError> {
        self.authorize(store_id, owner_id).await?;

        if self.nav_repo.find_by_id(store_id, item_id).await?.is_none() {
            return Err(DomainError::NavItemNotFound(*item_id));
        }

        let promoted = self.nav_repo.delete_promoting_children(store_id, item_id).await?;
        info!("Navigation item {} removed from store {} ({} children promoted)", item_id, store_id, promoted);
        Ok(())
    }

    /// Persist a full flattened order sent by the editor.
    ///
    /// The entries must name every current item exactly once. Depth chains
    /// are not corrected here; malformed ones resolve through the placement
    /// fallback and come back as warnings.
    pub async fn save_order(
        &self,
        store_id: &Uuid,
        owner_id: &Uuid,
        entries: &[OrderEntry],
    ) -> Result<PlacementPlan, DomainError> {
        self.authorize(store_id, owner_id).await?;

        let current: HashMap<Uuid, NavItem> = self.nav_repo.list_by_store(store_id).await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let list = self.resolve_entries(entries, &current)?;
        let plan = map_placements(&list);
        for warning in &plan.warnings {
            warn!(?warning, "Navigation order for store {} had a malformed depth chain", store_id);
        }

        self.nav_repo.apply_placements(store_id, &plan.placements).await?;

        info!("Navigation order saved for store {} ({} items)", store_id, plan.placements.len());
        Ok(plan)
    }

    fn resolve_entries(
        &self,
        entries: &[OrderEntry],
        current: &HashMap<Uuid, NavItem>,
    ) -> Result<Vec<FlatNavItem>, DomainError> {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut list = Vec::with_capacity(entries.len());

        for entry in entries {
            let item = current.get(&entry.id)
                .ok_or(DomainError::NavItemNotFound(entry.id))?;
            if !seen.insert(entry.id) {
                return Err(DomainError::ValidationError(format!(
                    "Navigation item {} appears more than once", entry.id
                )));
            }
            list.push(FlatNavItem {
                item: item.clone(),
                depth: entry.depth.min(self.max_depth),
            });
        }

        if seen.len() != current.len() {
            return Err(DomainError::ValidationError(format!(
                "Navigation order is missing {} item(s)",
                current.len() - seen.len()
            )));
        }

        Ok(list)
    }

    async fn authorize(&self, store_id: &Uuid, owner_id: &Uuid) -> Result<Store, DomainError> {
        let store = self.store_repo.find_by_id(store_id).await?
            .ok_or(DomainError::StoreNotFound)?;

        if !store.is_owned_by(owner_id) {
            warn!("User {} tried to edit navigation of store {}", owner_id, store_id);
            return Err(DomainError::Unauthorized(*store_id));
        }
        Ok(store)
    }
}

/// One entry of the editor's flattened list
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct OrderEntry {
    pub id: Uuid,
    pub depth: usize,
}

/// Rendered menu entry for the storefront
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLink {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub children: Vec<MenuLink>,
}

fn to_links(nodes: &[NavNode], store: &Store, pages: &HashMap<Uuid, Page>) -> Vec<MenuLink> {
    nodes
        .iter()
        .filter_map(|node| {
            let page = pages.get(&node.item.page_id)?;
            Some(MenuLink {
                id: node.id(),
                title: node.item.title.clone(),
                url: page_url(&store.slug, &page.slug),
                children: to_links(&node.children, store, pages),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::NavPlacement;
    use crate::navigation::test_support::{ids, item, page, STORE_ID};
    use crate::navigation::PlacementWarning;
    use crate::repositories::{MockNavigationRepository, MockPageRepository, MockStoreRepository};
    use shop_shared::constants::MAX_NAV_DEPTH;

    const OWNER_ID: Uuid = Uuid::from_u128(0x0a11);

    type TestService = NavigationService<MockNavigationRepository, MockPageRepository, MockStoreRepository>;

    fn store() -> Store {
        Store {
            id: STORE_ID,
            owner_id: OWNER_ID,
            name: "Acme".to_string(),
            slug: "acme".to_string(),
        }
    }

    fn owned_store() -> MockStoreRepository {
        let mut stores = MockStoreRepository::new();
        stores.expect_find_by_id().returning(|_| Ok(Some(store())));
        stores
    }

    fn service(nav: MockNavigationRepository, pages: MockPageRepository) -> TestService {
        NavigationService::new(Arc::new(nav), Arc::new(pages), Arc::new(owned_store()), MAX_NAV_DEPTH)
    }

    #[tokio::test]
    async fn test_add_item_appends_at_end() {
        let [page_id, _, _] = ids();
        let mut nav = MockNavigationRepository::new();
        nav.expect_find_by_page().returning(|_, _| Ok(None));
        nav.expect_max_position().returning(|_| Ok(Some(4)));
        nav.expect_create().returning(|item| Ok(item.clone()));
        let mut pages = MockPageRepository::new();
        pages.expect_find_by_id().returning(|_, id| Ok(Some(page(*id, "about"))));

        let created = service(nav, pages)
            .add_item(&STORE_ID, &OWNER_ID, &page_id, None)
            .await
            .unwrap();

        assert_eq!(created.position, 5);
        assert_eq!(created.title, "ABOUT");
        assert_eq!(created.page_id, page_id);
        assert!(created.is_root());
    }

    #[tokio::test]
    async fn test_add_item_uses_explicit_title_and_first_position() {
        let [page_id, _, _] = ids();
        let mut nav = MockNavigationRepository::new();
        nav.expect_find_by_page().returning(|_, _| Ok(None));
        nav.expect_max_position().returning(|_| Ok(None));
        nav.expect_create().returning(|item| Ok(item.clone()));
        let mut pages = MockPageRepository::new();
        pages.expect_find_by_id().returning(|_, id| Ok(Some(page(*id, "about"))));

        let created = service(nav, pages)
            .add_item(&STORE_ID, &OWNER_ID, &page_id, Some(" Our story "))
            .await
            .unwrap();
        assert_eq!(created.position, 0);
        assert_eq!(created.title, "Our story");
    }

    #[tokio::test]
    async fn test_add_item_shortens_long_page_title() {
        let [page_id, _, _] = ids();
        let mut nav = MockNavigationRepository::new();
        nav.expect_find_by_page().returning(|_, _| Ok(None));
        nav.expect_max_position().returning(|_| Ok(None));
        nav.expect_create().returning(|item| Ok(item.clone()));
        let mut pages = MockPageRepository::new();
        pages.expect_find_by_id().returning(|_, id| {
            Ok(Some(Page { title: "ü".repeat(150), ..page(*id, "long") }))
        });

        let created = service(nav, pages)
            .add_item(&STORE_ID, &OWNER_ID, &page_id, None)
            .await
            .unwrap();
        assert_eq!(created.title.chars().count(), NAV_TITLE_MAX_CHARS);
    }

    #[tokio::test]
    async fn test_add_item_rejects_long_explicit_title() {
        let [page_id, _, _] = ids();
        let mut nav = MockNavigationRepository::new();
        nav.expect_find_by_page().returning(|_, _| Ok(None));
        nav.expect_max_position().returning(|_| Ok(None));
        nav.expect_create().never();
        let mut pages = MockPageRepository::new();
        pages.expect_find_by_id().returning(|_, id| Ok(Some(page(*id, "about"))));

        let err = service(nav, pages)
            .add_item(&STORE_ID, &OWNER_ID, &page_id, Some(&"x".repeat(101)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_add_duplicate_page_rejected() {
        let [page_id, existing, _] = ids();
        let mut nav = MockNavigationRepository::new();
        nav.expect_find_by_page()
            .returning(move |_, _| Ok(Some(item(existing, None, 0))));
        nav.expect_create().never();
        let mut pages = MockPageRepository::new();
        pages.expect_find_by_id().returning(|_, id| Ok(Some(page(*id, "about"))));

        let err = service(nav, pages)
            .add_item(&STORE_ID, &OWNER_ID, &page_id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PageAlreadyLinked(id) if id == page_id));
        assert_eq!(err.to_string(), "This page is already in the navigation");
    }

    #[tokio::test]
    async fn test_add_unknown_page_rejected() {
        let [page_id, _, _] = ids();
        let nav = MockNavigationRepository::new();
        let mut pages = MockPageRepository::new();
        pages.expect_find_by_id().returning(|_, _| Ok(None));

        let err = service(nav, pages)
            .add_item(&STORE_ID, &OWNER_ID, &page_id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PageNotFound(_)));
    }

    #[tokio::test]
    async fn test_non_owner_rejected() {
        let mut nav = MockNavigationRepository::new();
        nav.expect_apply_placements().never();
        let svc = service(nav, MockPageRepository::new());

        let err = svc.save_order(&STORE_ID, &Uuid::new_v4(), &[]).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(id) if id == STORE_ID));
    }

    #[tokio::test]
    async fn test_unknown_store() {
        let mut stores = MockStoreRepository::new();
        stores.expect_find_by_id().returning(|_| Ok(None));
        let svc: TestService = NavigationService::new(
            Arc::new(MockNavigationRepository::new()),
            Arc::new(MockPageRepository::new()),
            Arc::new(stores),
            MAX_NAV_DEPTH,
        );
        assert!(matches!(svc.menu(&STORE_ID).await, Err(DomainError::StoreNotFound)));
    }

    #[tokio::test]
    async fn test_remove_item_promotes_children() {
        let [target, _, _] = ids();
        let mut nav = MockNavigationRepository::new();
        nav.expect_find_by_id()
            .returning(move |_, id| Ok(Some(item(*id, None, 0))));
        nav.expect_delete_promoting_children()
            .withf(move |_, id| *id == target)
            .times(1)
            .returning(|_, _| Ok(2));

        service(nav, MockPageRepository::new())
            .remove_item(&STORE_ID, &OWNER_ID, &target)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_missing_item() {
        let mut nav = MockNavigationRepository::new();
        nav.expect_find_by_id().returning(|_, _| Ok(None));
        nav.expect_delete_promoting_children().never();

        let err = service(nav, MockPageRepository::new())
            .remove_item(&STORE_ID, &OWNER_ID, &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NavItemNotFound(_)));
    }

    fn nav_with_items(items: Vec<NavItem>, saved: Arc<Mutex<Vec<Vec<NavPlacement>>>>) -> MockNavigationRepository {
        let mut nav = MockNavigationRepository::new();
        nav.expect_list_by_store().returning(move |_| Ok(items.clone()));
        nav.expect_apply_placements().returning(move |_, placements| {
            saved.lock().unwrap().push(placements.to_vec());
            Ok(())
        });
        nav
    }

    #[tokio::test]
    async fn test_save_order_reassigns_parent_and_is_idempotent() {
        let [a, b, c] = ids();
        let saved = Arc::new(Mutex::new(Vec::new()));
        let nav = nav_with_items(
            vec![item(a, None, 0), item(b, Some(a), 0), item(c, None, 1)],
            saved.clone(),
        );
        let svc = service(nav, MockPageRepository::new());

        let entries = [
            OrderEntry { id: a, depth: 0 },
            OrderEntry { id: c, depth: 0 },
            OrderEntry { id: b, depth: 1 },
        ];
        let plan = svc.save_order(&STORE_ID, &OWNER_ID, &entries).await.unwrap();
        svc.save_order(&STORE_ID, &OWNER_ID, &entries).await.unwrap();

        assert_eq!(
            plan.placements,
            vec![
                NavPlacement { id: a, position: 0, parent_id: None },
                NavPlacement { id: c, position: 1, parent_id: None },
                NavPlacement { id: b, position: 2, parent_id: Some(c) },
            ]
        );
        let saved = saved.lock().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0], saved[1]);
    }

    #[tokio::test]
    async fn test_save_order_reports_malformed_chain() {
        let [a, b, _] = ids();
        let saved = Arc::new(Mutex::new(Vec::new()));
        let nav = nav_with_items(vec![item(a, None, 0), item(b, None, 1)], saved);

        let entries = [OrderEntry { id: a, depth: 0 }, OrderEntry { id: b, depth: 9 }];
        let plan = service(nav, MockPageRepository::new())
            .save_order(&STORE_ID, &OWNER_ID, &entries)
            .await
            .unwrap();

        // depth 9 is clamped to 2 and then has nothing at depth 1 to hang from
        assert_eq!(plan.placements[1].parent_id, None);
        assert_eq!(
            plan.warnings,
            vec![PlacementWarning::MissingAncestor { item_id: b, depth: MAX_NAV_DEPTH }]
        );
    }

    #[tokio::test]
    async fn test_save_order_rejects_incomplete_or_unknown() {
        let [a, b, stranger] = ids();
        let saved = Arc::new(Mutex::new(Vec::new()));
        let nav = nav_with_items(vec![item(a, None, 0), item(b, None, 1)], saved.clone());
        let svc = service(nav, MockPageRepository::new());

        let missing = svc.save_order(&STORE_ID, &OWNER_ID, &[OrderEntry { id: a, depth: 0 }]).await;
        assert!(matches!(missing, Err(DomainError::ValidationError(_))));

        let duplicate = [
            OrderEntry { id: a, depth: 0 },
            OrderEntry { id: a, depth: 0 },
        ];
        let dup = svc.save_order(&STORE_ID, &OWNER_ID, &duplicate).await;
        assert!(matches!(dup, Err(DomainError::ValidationError(_))));

        let unknown = [
            OrderEntry { id: a, depth: 0 },
            OrderEntry { id: stranger, depth: 0 },
        ];
        let unk = svc.save_order(&STORE_ID, &OWNER_ID, &unknown).await;
        assert!(matches!(unk, Err(DomainError::NavItemNotFound(id)) if id == stranger));

        assert!(saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_menu_resolves_urls_and_hides_unpublished() {
        let [a, b, c] = ids();
        let [pa, pb, pc] = ids();
        let mut root = item(a, None, 0);
        root.page_id = pa;
        let mut child = item(b, Some(a), 0);
        child.page_id = pb;
        let mut hidden = item(c, None, 1);
        hidden.page_id = pc;

        let mut nav = MockNavigationRepository::new();
        nav.expect_list_by_store()
            .returning(move |_| Ok(vec![hidden.clone(), child.clone(), root.clone()]));
        let mut pages = MockPageRepository::new();
        pages.expect_list_by_store().returning(move |_| {
            let mut draft = page(pc, "draft");
            draft.is_published = false;
            Ok(vec![page(pa, "about"), page(pb, "team"), draft])
        });

        let menu = service(nav, pages).menu(&STORE_ID).await.unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].url, "/acme/pages/about");
        assert_eq!(menu[0].children.len(), 1);
        assert_eq!(menu[0].children[0].url, "/acme/pages/team");
    }

    #[tokio::test]
    async fn test_available_pages_excludes_linked() {
        let [a, _, _] = ids();
        let [p1, p2, _] = ids();
        let mut linked = item(a, None, 0);
        linked.page_id = p1;

        let mut nav = MockNavigationRepository::new();
        nav.expect_list_by_store().returning(move |_| Ok(vec![linked.clone()]));
        let mut pages = MockPageRepository::new();
        pages.expect_list_by_store()
            .returning(move |_| Ok(vec![page(p1, "home"), page(p2, "faq")]));

        let available = service(nav, pages)
            .available_pages(&STORE_ID, &OWNER_ID)
            .await
            .unwrap();
        assert_eq!(available.iter().map(|p| p.id).collect::<Vec<_>>(), vec![p2]);
    }

    #[tokio::test]
    async fn test_editor_empty_store() {
        let mut nav = MockNavigationRepository::new();
        nav.expect_list_by_store().returning(|_| Ok(Vec::new()));

        let editor = service(nav, MockPageRepository::new())
            .editor(&STORE_ID, &OWNER_ID)
            .await
            .unwrap();
        assert!(editor.is_empty());
        assert!(editor.placements().placements.is_empty());
    }
}

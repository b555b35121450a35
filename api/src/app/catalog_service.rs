//! Catalog service
//!
//! Canned storefront data: the franchise listing and the menu. The listing
//! is built once around the seeded admin and never changes. Franchise and
//! store creation hand out fresh ids and echo the request back, but nothing
//! is added to the listing.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{
    Franchise, FranchiseAdmin, FranchiseList, MenuItem, SanitizedUser, Store, UserId,
};

// First ids after the canned listing
const FIRST_FRANCHISE_ID: u64 = 5;
const FIRST_STORE_ID: u64 = 8;

pub struct CatalogService {
    franchises: Vec<Franchise>,
    menu: Vec<MenuItem>,
    next_franchise_id: AtomicU64,
    next_store_id: AtomicU64,
}

impl CatalogService {
    pub fn new(admin: &SanitizedUser) -> Self {
        Self {
            franchises: canned_franchises(admin),
            menu: canned_menu(),
            next_franchise_id: AtomicU64::new(FIRST_FRANCHISE_ID),
            next_store_id: AtomicU64::new(FIRST_STORE_ID),
        }
    }

    /// The franchise listing; paging and name filters are not applied
    pub fn list_franchises(&self) -> FranchiseList {
        FranchiseList {
            franchises: self.franchises.clone(),
            more: false,
        }
    }

    /// Franchises administered by `user_id`
    pub fn franchises_for_user(&self, user_id: &UserId) -> Vec<Franchise> {
        self.franchises
            .iter()
            .filter(|f| f.is_administered_by(user_id))
            .cloned()
            .collect()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Acknowledge a new franchise with a fresh id
    pub fn create_franchise(&self, name: &str, admins: Vec<FranchiseAdmin>) -> Franchise {
        let franchise = Franchise {
            id: self.next_franchise_id.fetch_add(1, Ordering::Relaxed),
            name: name.to_string(),
            admins,
            stores: vec![],
        };
        tracing::debug!(franchise_id = franchise.id, name, "Created franchise");
        franchise
    }

    /// Acknowledge a new store with a fresh id and no revenue yet
    pub fn create_store(&self, franchise_id: &str, name: &str) -> Store {
        let store = Store {
            id: self.next_store_id.fetch_add(1, Ordering::Relaxed),
            name: name.to_string(),
            total_revenue: Some(0.0),
        };
        tracing::debug!(franchise_id, store_id = store.id, name, "Created store");
        store
    }
}

fn canned_franchises(admin: &SanitizedUser) -> Vec<Franchise> {
    let admins = vec![FranchiseAdmin::from(admin)];

    vec![
        Franchise {
            id: 2,
            name: "LotaPizza".to_string(),
            admins: admins.clone(),
            stores: vec![
                Store::new(4, "Lehi"),
                Store::new(5, "Springville"),
                Store::new(6, "American Fork"),
            ],
        },
        Franchise {
            id: 3,
            name: "PizzaCorp".to_string(),
            admins,
            stores: vec![Store::new(7, "Spanish Fork")],
        },
        Franchise {
            id: 4,
            name: "topSpot".to_string(),
            admins: vec![],
            stores: vec![],
        },
    ]
}

fn canned_menu() -> Vec<MenuItem> {
    let item = |id: u64, title: &str, image: &str, price: f64, description: &str| MenuItem {
        id,
        title: title.to_string(),
        image: image.to_string(),
        price,
        description: description.to_string(),
    };

    vec![
        item(1, "Veggie", "pizza1.png", 0.0038, "A garden of delight"),
        item(2, "Pepperoni", "pizza2.png", 0.0042, "Spicy treat"),
        item(3, "Margarita", "pizza3.png", 0.0042, "Essential classic"),
        item(4, "Crusty", "pizza4.png", 0.0028, "A dry mouthed favorite"),
        item(5, "Charred Leopard", "pizza5.png", 0.0099, "For those with a darker side"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_admin;

    #[test]
    fn listing_is_canned_and_complete() {
        let catalog = CatalogService::new(&test_admin());

        let list = catalog.list_franchises();

        assert!(!list.more);
        let names: Vec<_> = list.franchises.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["LotaPizza", "PizzaCorp", "topSpot"]);
        assert_eq!(list.franchises[0].stores.len(), 3);
    }

    #[test]
    fn listing_admins_reference_seeded_admin() {
        let admin = test_admin();
        let catalog = CatalogService::new(&admin);

        let list = catalog.list_franchises();

        assert_eq!(list.franchises[0].admins[0].id, admin.id);
        assert_eq!(list.franchises[0].admins[0].email, admin.email);
    }

    #[test]
    fn franchises_for_user_filters_by_admin() {
        let admin = test_admin();
        let catalog = CatalogService::new(&admin);

        assert_eq!(catalog.franchises_for_user(&admin.id).len(), 2);
        assert!(catalog.franchises_for_user(&UserId::from("99")).is_empty());
    }

    #[test]
    fn created_franchises_get_fresh_ids_but_stay_out_of_the_listing() {
        let admin = test_admin();
        let catalog = CatalogService::new(&admin);

        let first = catalog.create_franchise("MegaPizza", vec![FranchiseAdmin::from(&admin)]);
        let second = catalog.create_franchise("MiniPizza", vec![]);

        assert_eq!(first.name, "MegaPizza");
        assert_eq!(first.admins[0].email, "a@jwt.com");
        assert!(first.stores.is_empty());
        assert!(second.id > first.id);
        assert!(first.id > 4);
        assert_eq!(catalog.list_franchises().franchises.len(), 3);
    }

    #[test]
    fn created_store_has_zero_revenue() {
        let catalog = CatalogService::new(&test_admin());

        let store = catalog.create_store("2", "Downtown");

        assert_eq!(store.name, "Downtown");
        assert_eq!(store.total_revenue, Some(0.0));
        assert!(store.id > 7);
        assert_ne!(catalog.create_store("2", "Uptown").id, store.id);
    }

    #[test]
    fn menu_starts_with_veggie_and_pepperoni() {
        let catalog = CatalogService::new(&test_admin());

        let menu = catalog.menu();

        assert_eq!(menu[0].title, "Veggie");
        assert_eq!(menu[0].price, 0.0038);
        assert_eq!(menu[1].title, "Pepperoni");
        assert_eq!(menu[1].price, 0.0042);
    }
}

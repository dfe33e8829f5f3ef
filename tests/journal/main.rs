//! Aggregates defined outside the crate with `#[digest]` and `aggregate!`.

use hobby_storefront::{digest, hydrate, Entity, EventRecord, ProductId, StorefrontError};

#[derive(Default)]
pub struct Wishlist {
    journal: Entity,
    owner: String,
    wanted: Vec<ProductId>,
    shared: bool,
}

impl Wishlist {
    #[digest(journal, "Opened")]
    pub fn open(&mut self, owner: String) {
        self.journal.set_id(format!("wishlist:{}", owner));
        self.owner = owner;
    }

    #[digest(journal, "Wanted", when = !self.wanted.contains(&product_id))]
    pub fn want(&mut self, product_id: ProductId) {
        self.wanted.push(product_id);
    }

    #[digest(journal, "Shared", when = !self.shared)]
    pub fn share(&mut self) {
        self.shared = true;
    }

    #[digest(journal, "Renamed")]
    pub fn rename(&mut self, label: String) {
        let _ = label;
    }

    pub fn touch(&mut self) {}
}

hobby_storefront::aggregate!(Wishlist, journal {
    "Opened"(owner) => open,
    "Wanted"(product_id) => want,
    "Shared"() => share,
    "Renamed"(label) => touch(),
});

#[test]
fn guarded_methods_journal_once() {
    let mut wishlist = Wishlist::default();
    wishlist.open("masha".to_string());
    wishlist.want(ProductId(3));
    wishlist.want(ProductId(3));
    wishlist.share();
    wishlist.share();

    let names: Vec<&str> = wishlist
        .journal
        .events()
        .iter()
        .map(|event| event.event_name.as_str())
        .collect();
    assert_eq!(names, vec!["Opened", "Wanted", "Shared"]);
}

#[test]
fn hydrate_replays_through_the_same_methods() {
    let mut wishlist = Wishlist::default();
    wishlist.open("masha".to_string());
    wishlist.want(ProductId(3));
    wishlist.want(ProductId(8));
    wishlist.share();
    wishlist.rename("birthday".to_string());

    let restored: Wishlist = hydrate(wishlist.journal.clone()).unwrap();
    assert_eq!(restored.owner, "masha");
    assert_eq!(restored.wanted, vec![ProductId(3), ProductId(8)]);
    assert!(restored.shared);
    assert_eq!(restored.journal.id(), "wishlist:masha");
    assert_eq!(restored.journal.version(), 5);
}

#[test]
fn unknown_event_fails_replay() {
    let mut journal = Entity::with_id("wishlist:masha");
    journal.load_from_history(vec![EventRecord::new("Deleted", vec![], 1)]);
    let err = hydrate::<Wishlist>(journal).err().unwrap();
    assert!(matches!(err, StorefrontError::Replay(ref message) if message.contains("unknown event: Deleted")));
}

#[path = "../support/mod.rs"]
mod support;

use std::cell::RefCell;
use std::rc::Rc;

use hobby_storefront::{
    Category, CategorySelection, ChangeKind, ProductId, Render, Section, SectionBody, StoreChange,
    Storefront, StorefrontConfig, StorefrontError, StorefrontView, TextRenderer,
};

#[test]
fn listener_rerenders_after_every_change() {
    support::init_tracing();
    let mut storefront = Storefront::default();
    let frames = Rc::new(RefCell::new(Vec::new()));

    // The listener only sees the change; the frame is rebuilt from state afterwards.
    let pending = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&pending);
    storefront.on_any(move |_| *counter.borrow_mut() += 1);

    let render = |storefront: &Storefront| {
        if *pending.borrow() > 0 {
            *pending.borrow_mut() = 0;
            frames
                .borrow_mut()
                .push(TextRenderer.render(&StorefrontView::from_storefront(storefront)));
        }
    };

    storefront.open_catalog();
    render(&storefront);
    storefront.select_category("Рукоделие");
    render(&storefront);
    storefront.add_to_cart(ProductId(6)).unwrap();
    render(&storefront);
    storefront.remove_from_cart(ProductId(1));
    render(&storefront);

    let frames = frames.borrow();
    assert_eq!(frames.len(), 3);
    assert!(frames[0].contains("[Каталог]"));
    assert!(frames[1].contains("[Рукоделие]"));
    assert!(!frames[1].contains("#1 "));
    assert!(frames[2].contains("Корзина (1)"));
    assert!(frames[2].contains("Итого: 1590 ₽"));
}

#[test]
fn shopping_session() {
    let mut storefront = Storefront::default();
    let cart_totals = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&cart_totals);
    storefront.on(ChangeKind::Cart, move |change| {
        if let StoreChange::CartChanged { total_amount, .. } = change {
            log.borrow_mut().push(*total_amount);
        }
    });

    for id in [1, 2, 1, 9] {
        storefront.add_to_cart(ProductId(id)).unwrap();
    }
    storefront.increment(ProductId(9));
    storefront.decrement(ProductId(2));
    storefront.update_quantity(ProductId(1), 5);

    assert_eq!(storefront.total_item_count(), 7);
    assert_eq!(storefront.total_amount(), 5 * 1299 + 2 * 320);
    assert_eq!(
        *cart_totals.borrow(),
        vec![1299, 1749, 3048, 3368, 3688, 3238, 5 * 1299 + 640]
    );

    let ids: Vec<u32> = storefront.cart().items().map(|item| item.id().0).collect();
    assert_eq!(ids, vec![1, 9]);
}

#[test]
fn unknown_product_is_reported() {
    let mut storefront = Storefront::default();
    assert_eq!(
        storefront.add_to_cart(ProductId(0)),
        Err(StorefrontError::UnknownProduct(ProductId(0)))
    );
    assert_eq!(storefront.total_item_count(), 0);
}

#[test]
fn unrecognized_category_shows_no_products() {
    let mut storefront = Storefront::default();
    storefront.open_catalog();
    storefront.select_category("Лепка");

    assert_eq!(
        storefront.selection(),
        &CategorySelection::Unrecognized("Лепка".to_string())
    );
    assert!(storefront.visible_products().is_empty());

    match StorefrontView::from_storefront(&storefront).body {
        SectionBody::Catalog { categories, products, .. } => {
            assert!(products.is_empty());
            assert!(categories.iter().all(|button| !button.active));
        }
        other => panic!("expected catalog body, got {:?}", other),
    }
}

#[test]
fn configured_storefront() {
    let config = StorefrontConfig::from_json(
        r#"{
            "store_name": "Мастерская",
            "currency_symbol": "руб.",
            "featured_count": 1,
            "products": [
                {"id": 100, "name": "Бисер", "price": 150, "category": "Рукоделие"},
                {"id": 101, "name": "Мольберт", "price": 3500, "category": "Рисование"}
            ]
        }"#,
    )
    .unwrap();
    let mut storefront = Storefront::from_config(&config).unwrap();
    storefront.add_to_cart(ProductId(101)).unwrap();

    let view = StorefrontView::from_storefront(&storefront);
    match &view.body {
        SectionBody::Home { featured, .. } => {
            assert_eq!(featured.len(), 1);
            assert_eq!(featured[0].name, "Бисер");
        }
        other => panic!("expected home body, got {:?}", other),
    }

    let text = TextRenderer.render(&view);
    assert!(text.starts_with("Мастерская\n"));
    assert!(text.contains("Итого: 3500 руб."));

    storefront.select_category(Category::Drawing);
    let visible: Vec<u32> = storefront.visible_products().iter().map(|p| p.id.0).collect();
    assert_eq!(visible, vec![101]);
}

#[test]
fn view_serializes_for_external_renderers() {
    let mut storefront = Storefront::default();
    storefront.switch_section(Section::Contacts);
    storefront.add_to_cart(ProductId(3)).unwrap();

    let json = serde_json::to_value(StorefrontView::from_storefront(&storefront)).unwrap();
    assert_eq!(json["cart_badge"], 1);
    assert_eq!(json["body"]["Info"]["title"], "Контакты");
    assert_eq!(json["cart"]["lines"][0]["name"], "Набор кистей 12 шт");
    assert_eq!(json["nav"][4]["active"], true);
}

#[test]
fn huge_configured_prices_saturate_totals() {
    let config = StorefrontConfig::from_json(
        r#"{"products": [
            {"id": 1, "name": "Мольберт", "price": 18446744073709551615, "category": "Рисование"},
            {"id": 2, "name": "Бисер", "price": 150, "category": "Рукоделие"}
        ]}"#,
    )
    .unwrap();
    let mut storefront = Storefront::from_config(&config).unwrap();
    storefront.add_to_cart(ProductId(1)).unwrap();
    storefront.increment(ProductId(1));
    storefront.add_to_cart(ProductId(2)).unwrap();

    assert_eq!(storefront.total_amount(), u64::MAX);
    assert_eq!(storefront.total_item_count(), 3);
    let text = TextRenderer.render(&StorefrontView::from_storefront(&storefront));
    assert!(text.contains(&u64::MAX.to_string()));
}

#[test]
fn add_at_max_quantity_does_not_notify() {
    let mut storefront = Storefront::default();
    storefront.add_to_cart(ProductId(1)).unwrap();
    storefront.update_quantity(ProductId(1), i64::from(u32::MAX));

    let seen = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&seen);
    storefront.on(ChangeKind::Cart, move |_| *counter.borrow_mut() += 1);

    storefront.add_to_cart(ProductId(1)).unwrap();
    storefront.increment(ProductId(1));

    assert_eq!(*seen.borrow(), 0);
    assert_eq!(storefront.cart().quantity(ProductId(1)), Some(u32::MAX));
}

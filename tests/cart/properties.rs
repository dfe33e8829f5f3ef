use hobby_storefront::{hydrate, Cart, Category, Product, ProductId};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Add(u32),
    Remove(u32),
    Update(u32, i64),
    Increment(u32),
    Decrement(u32),
}

fn product(id: u32) -> Product {
    Product::new(id, format!("product-{}", id), u64::from(id) * 10 + 5, Category::Modelling)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..6).prop_map(Op::Add),
        (0u32..6).prop_map(Op::Remove),
        (0u32..6, -3i64..8).prop_map(|(id, q)| Op::Update(id, q)),
        (0u32..6).prop_map(Op::Increment),
        (0u32..6).prop_map(Op::Decrement),
    ]
}

/// Reference cart: an ordered list scanned linearly.
fn apply_to_model(model: &mut Vec<(u32, u32)>, op: &Op) {
    let current = |model: &Vec<(u32, u32)>, id: u32| model.iter().find(|(i, _)| *i == id).map(|(_, q)| *q);
    let target = match *op {
        Op::Add(id) => {
            match model.iter_mut().find(|(i, _)| *i == id) {
                Some(line) => line.1 += 1,
                None => model.push((id, 1)),
            }
            return;
        }
        Op::Remove(id) => (id, 0),
        Op::Update(id, q) => (id, q),
        Op::Increment(id) => match current(model, id) {
            Some(q) => (id, i64::from(q) + 1),
            None => return,
        },
        Op::Decrement(id) => match current(model, id) {
            Some(q) => (id, i64::from(q) - 1),
            None => return,
        },
    };

    let (id, quantity) = target;
    if quantity <= 0 {
        model.retain(|(i, _)| *i != id);
    } else if let Some(line) = model.iter_mut().find(|(i, _)| *i == id) {
        line.1 = quantity as u32;
    }
}

fn apply_to_cart(cart: &mut Cart, op: &Op) {
    match *op {
        Op::Add(id) => cart.add_to_cart(&product(id)),
        Op::Remove(id) => cart.remove_from_cart(ProductId(id)),
        Op::Update(id, q) => cart.update_quantity(ProductId(id), q),
        Op::Increment(id) => cart.increment(ProductId(id)),
        Op::Decrement(id) => cart.decrement(ProductId(id)),
    }
}

proptest! {
    #[test]
    fn cart_matches_reference_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut cart = Cart::new();
        let mut model = Vec::new();
        for op in &ops {
            apply_to_cart(&mut cart, op);
            apply_to_model(&mut model, op);
        }

        let lines: Vec<(u32, u32)> = cart.items().map(|item| (item.id().0, item.quantity)).collect();
        prop_assert_eq!(&lines, &model);
    }

    #[test]
    fn totals_are_sums_over_lines(ops in prop::collection::vec(op(), 0..60)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply_to_cart(&mut cart, op);
            prop_assert!(cart.items().all(|item| item.quantity >= 1));

            let amount: u64 = cart.items().map(|i| i.product.price * u64::from(i.quantity)).sum();
            let count: u64 = cart.items().map(|i| u64::from(i.quantity)).sum();
            prop_assert_eq!(cart.total_amount(), amount);
            prop_assert_eq!(cart.total_item_count(), count);
        }
    }

    #[test]
    fn replay_reproduces_cart(ops in prop::collection::vec(op(), 0..60)) {
        let mut cart = Cart::with_id("prop");
        for op in &ops {
            apply_to_cart(&mut cart, op);
        }
        let restored: Cart = hydrate(cart.entity.clone()).unwrap();
        prop_assert_eq!(restored.snapshot(), cart.snapshot());
    }
}

//! Cart behaviour across reloads and backends.

use shop_cart::prelude::*;
use shop_kv::{FileStore, KvStore, MemoryStore};

fn catalog() -> Catalog {
    Catalog::new([
        Product::new(1, "Handwoven Bag", "bags", 100).with_name_mm("လက်ရက်အိတ်"),
        Product::new(2, "Traditional Necklace", "jewelry", 50),
        Product::new(3, "Textile Scarf", "textiles", 14000).with_image("images/scarf.jpg"),
    ])
}

fn add(cart: &mut CartStore<impl KvStore>, id: u64) {
    let catalog = catalog();
    let product = catalog.require(ProductId::new(id)).unwrap();
    cart.add(product).unwrap();
}

#[test]
fn same_product_twice_is_one_line_with_quantity_two() {
    let mut cart = CartStore::open(MemoryStore::new(), CartSettings::default());
    add(&mut cart, 1);
    add(&mut cart, 1);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);
}

#[test]
fn decrement_on_quantity_one_removes_line() {
    let mut cart = CartStore::open(MemoryStore::new(), CartSettings::default());
    add(&mut cart, 1);

    let change = cart.update_quantity(ProductId::new(1), -1).unwrap();
    assert_eq!(change, QuantityChange::Removed);
    assert!(cart.get(ProductId::new(1)).is_none());
}

#[test]
fn totals_sum_quantities_and_line_prices() {
    let mut cart = CartStore::open(MemoryStore::new(), CartSettings::default());
    add(&mut cart, 1);
    add(&mut cart, 1);
    add(&mut cart, 2);

    let totals = cart.totals().unwrap();
    assert_eq!(totals.item_count, 3);
    assert_eq!(totals.subtotal.amount, 250);
    assert_eq!(totals.total.amount, 250);
}

#[test]
fn clear_then_reload_is_empty() {
    let store = MemoryStore::new();
    let mut cart = CartStore::open(store.clone(), CartSettings::default());
    add(&mut cart, 1);
    add(&mut cart, 2);

    cart.clear();
    cart.load();
    assert!(cart.is_empty());

    let reopened = CartStore::open(store, CartSettings::default());
    assert!(reopened.is_empty());
}

#[test]
fn order_text_lists_each_item_once_and_ends_with_total() {
    let mut cart = CartStore::open(MemoryStore::new(), CartSettings::default());
    add(&mut cart, 1);
    add(&mut cart, 1);
    add(&mut cart, 2);
    add(&mut cart, 3);

    let text = cart.to_order_text(Locale::En).unwrap();
    for item in cart.items() {
        assert_eq!(text.matches(&format!("• {}\n", item.name)).count(), 1);
        let quantity_line = format!("• {}\n  Quantity: {}\n", item.name, item.quantity);
        assert_eq!(text.matches(&quantity_line).count(), 1);
    }
    assert!(text.ends_with("Total: 14,250 MMK"));
}

#[test]
fn reload_in_fresh_instance_reproduces_list() {
    let store = MemoryStore::new();
    let mut cart = CartStore::open(store.clone(), CartSettings::default());
    add(&mut cart, 3);
    add(&mut cart, 1);
    add(&mut cart, 3);
    add(&mut cart, 2);
    cart.update_quantity(ProductId::new(2), 4).unwrap();

    let fresh = CartStore::open(store, CartSettings::default());
    assert_eq!(fresh.items(), cart.items());
    let ids: Vec<u64> = fresh.items().iter().map(|i| i.id.get()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn file_store_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::open(store, CartSettings::default());
        add(&mut cart, 1);
        add(&mut cart, 3);
    }

    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::open(store, CartSettings::default());
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.items()[1].image, "images/scarf.jpg");
    assert_eq!(cart.items()[0].name_mm.as_deref(), Some("လက်ရက်အိတ်"));
}

#[test]
fn reads_cart_written_by_shop_page() {
    let store = MemoryStore::new();
    store
        .set(
            "mimoCart",
            r#"[{"id":7,"name":"Lacquer Bowl","nameMM":"ယွန်းထည်","category":"homeDecor",
                 "image":"img/bowl.png","price":18000,"quantity":2}]"#
                .as_bytes(),
        )
        .unwrap();

    let cart = CartStore::open(store, CartSettings::default());
    let text = cart.to_order_text(Locale::Mm).unwrap();
    assert!(text.contains("• ယွန်းထည်\n"));
    assert!(text.ends_with("36,000 MMK"));
}

#[test]
fn last_writer_wins_between_instances() {
    let store = MemoryStore::new();
    let mut first = CartStore::open(store.clone(), CartSettings::default());
    let mut second = CartStore::open(store.clone(), CartSettings::default());

    add(&mut first, 1);
    add(&mut second, 2);

    let reloaded = CartStore::open(store, CartSettings::default());
    let ids: Vec<u64> = reloaded.items().iter().map(|i| i.id.get()).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn page_flow_from_shop_to_checkout() {
    let store = MemoryStore::new();
    let catalog = catalog();

    // Shop page adds products
    let mut shop = CartPage::open(store.clone(), CartSettings::default(), Locale::En);
    for id in [1, 2, 1] {
        let product = catalog.require(ProductId::new(id)).unwrap().clone();
        shop.handle(CartEvent::Add(product)).unwrap();
    }
    assert_eq!(shop.cart().badge_count(), 3);

    // Cart page opens over the same storage
    let mut cart_page = CartPage::open(store, CartSettings::default(), Locale::En);
    let rendered = cart_page.render().unwrap();
    assert_eq!(rendered.rows().len(), 2);

    let outcome = cart_page.handle(CartEvent::Checkout).unwrap();
    let link = outcome.link.unwrap();
    assert!(link.message.contains("Total: 250 MMK"));
    assert_eq!(outcome.notice.unwrap().kind, NoticeKind::Success);
}

#[test]
fn fractional_price_row_survives_next_write() {
    let store = MemoryStore::new();
    store
        .set(
            "mimoCart",
            br#"[{"id":1,"name":"Handwoven Bag","price":12000,"quantity":2},
                 {"id":2,"name":"Traditional Necklace","price":19.99,"quantity":1}]"#,
        )
        .unwrap();

    let mut cart = CartStore::open(store.clone(), CartSettings::default());
    assert_eq!(cart.items().len(), 2);
    add(&mut cart, 3);

    let reopened = CartStore::open(store, CartSettings::default());
    let ids: Vec<u64> = reopened.items().iter().map(|i| i.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(reopened.items()[0].quantity, 2);
}

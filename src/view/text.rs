use super::{CartPanel, ProductCard, SectionBody, StorefrontView};

/// Turns a view into some presentable output.
pub trait Render {
    type Output;

    fn render(&self, view: &StorefrontView) -> Self::Output;
}

/// Plain-text frame of the page. Active tabs and buttons are bracketed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

const EMPTY_CART: &str = "Корзина пуста";

impl TextRenderer {
    fn money(&self, amount: u64, view: &StorefrontView) -> String {
        format!("{} {}", amount, view.currency_symbol)
    }

    fn card(&self, card: &ProductCard, view: &StorefrontView) -> String {
        format!(
            "#{} {} | {} | {} [В корзину]",
            card.id,
            card.name,
            card.category,
            self.money(card.price, view)
        )
    }

    fn cart(&self, panel: &CartPanel, view: &StorefrontView, out: &mut Vec<String>) {
        out.push("-- Корзина --".to_string());
        if panel.lines.is_empty() {
            out.push(EMPTY_CART.to_string());
            return;
        }
        for line in &panel.lines {
            out.push(format!(
                "{} {} [-] {} [+] = {}",
                line.name,
                self.money(line.unit_price, view),
                line.quantity,
                self.money(line.line_total, view)
            ));
        }
        out.push(format!("Итого: {}", self.money(panel.total_amount, view)));
        if panel.checkout_available {
            out.push("[Оформить заказ]".to_string());
        }
    }
}

fn bracket(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}

impl Render for TextRenderer {
    type Output = String;

    fn render(&self, view: &StorefrontView) -> String {
        let mut out = vec![view.store_name.clone()];

        let mut header: Vec<String> = view.nav.iter().map(|tab| bracket(tab.label, tab.active)).collect();
        header.push(match view.cart_badge {
            Some(count) => format!("Корзина ({})", count),
            None => "Корзина".to_string(),
        });
        out.push(header.join("  "));

        match &view.body {
            SectionBody::Home { headline, featured } => {
                out.push(format!("== {} ==", headline));
                out.push("[Перейти в каталог]".to_string());
                out.push("Популярные товары".to_string());
                out.extend(featured.iter().map(|card| self.card(card, view)));
            }
            SectionBody::Catalog {
                title,
                categories,
                products,
            } => {
                out.push(format!("== {} ==", title));
                let buttons: Vec<String> = categories
                    .iter()
                    .map(|button| bracket(&button.label, button.active))
                    .collect();
                out.push(buttons.join(" "));
                out.extend(products.iter().map(|card| self.card(card, view)));
            }
            SectionBody::Info { title } => out.push(format!("== {} ==", title)),
        }

        self.cart(&view.cart, view, &mut out);
        out.join("\n")
    }
}

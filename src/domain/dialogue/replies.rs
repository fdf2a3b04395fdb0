//! Builders for the cards the assistant sends.

use super::cards::{Card, CardAction, CardImage, Fact, HeroCard, ReceiptCard, ReceiptItem};
use super::messages;
use super::ReceiptTotals;
use crate::domain::catalog::{CustomerProfile, Product};
use crate::domain::session::CartLine;

/// The card shown when the user asks for help.
pub fn intro_card(store_name: &str, image_url: &str) -> Card {
    Card::Hero(
        HeroCard::new(messages::welcome(store_name))
            .with_text(messages::INFO)
            .with_image(CardImage::new(image_url))
            .with_button(CardAction::open_url("Enter my credentials", "Login"))
            .with_button(CardAction::open_url("Show me the product list", "ProductInfo")),
    )
}

/// The card confirming a successful login.
pub fn welcome_card(customer: &CustomerProfile) -> Card {
    Card::Hero(
        HeroCard::new("Welcome")
            .with_text(customer.customer_name.clone())
            .with_subtitle(customer.company_name.clone()),
    )
}

/// One carousel entry; its button sends back an add-to-cart command with the id.
pub fn product_card(product: &Product) -> Card {
    Card::Hero(
        HeroCard::new(product.name.clone())
            .with_subtitle(product.list_price.display())
            .with_text(product.description())
            .with_button(CardAction::im_back(
                " Add To Cart ",
                messages::add_to_cart_command(product.product_id),
            ))
            .with_image(CardImage::inline_gif(&product.photo_ref)),
    )
}

pub fn receipt_card(
    store_name: &str,
    customer: &CustomerProfile,
    lines: &[CartLine],
    totals: &ReceiptTotals,
) -> Card {
    let items = lines
        .iter()
        .map(|line| ReceiptItem {
            text: line.product_name.clone(),
            subtitle: line.product_name.clone(),
            quantity: "1".to_string(),
            price: line.list_price.display(),
            image: CardImage::inline_gif(&line.photo_ref),
        })
        .collect();

    Card::Receipt(ReceiptCard {
        title: store_name.to_string(),
        facts: vec![
            Fact::new("Name:", customer.customer_name.clone()),
            Fact::new("E-mail:", customer.email.clone()),
            Fact::new("Company:", customer.company_name.clone()),
        ],
        items,
        tax: totals.tax.display(),
        total: totals.total.display(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CustomerId, Money, ProductId};
    use crate::domain::dialogue::ActionKind;
    use rust_decimal::Decimal;

    fn bike() -> Product {
        Product {
            product_id: ProductId::new(771),
            name: "Mountain-100 Silver, 38".into(),
            color: "Silver".into(),
            list_price: Money::parse("3399.99").unwrap(),
            photo_ref: "R0lGOD".into(),
            category: "Mountain Bikes".into(),
            model: "Mountain-100".into(),
        }
    }

    #[test]
    fn intro_card_has_two_link_buttons_and_one_image() {
        let Card::Hero(card) = intro_card("Adventure Works", "https://example.com/logo.png") else {
            panic!("expected hero card");
        };
        assert_eq!(card.title, "Welcome to Adventure Works");
        assert_eq!(card.images.len(), 1);
        let labels: Vec<_> = card.buttons.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(labels, ["Enter my credentials", "Show me the product list"]);
        assert!(card.buttons.iter().all(|b| b.kind == ActionKind::OpenUrl));
    }

    #[test]
    fn product_card_formats_price_and_encodes_id() {
        let Card::Hero(card) = product_card(&bike()) else {
            panic!("expected hero card");
        };
        assert_eq!(card.subtitle.as_deref(), Some("3,399.99"));
        assert_eq!(card.text.as_deref(), Some("Mountain Bikes - Mountain-100 - Silver"));
        assert_eq!(card.buttons.len(), 1);
        assert_eq!(card.buttons[0].value, "Add product 771 to the cart");
        assert_eq!(card.images[0].url, "data:image/gif;base64,R0lGOD");
    }

    #[test]
    fn receipt_card_lists_each_line_once() {
        let customer = CustomerProfile {
            customer_id: Some(CustomerId::new(1)),
            customer_name: "Orlando Gee".into(),
            company_name: "A Bike Store".into(),
            email: "orlando0@adventure-works.com".into(),
        };
        let lines = vec![
            CartLine::for_product(customer.customer_id, &bike()),
            CartLine::for_product(customer.customer_id, &bike()),
        ];
        let totals = ReceiptTotals::compute(lines.iter().map(|l| l.list_price), Decimal::new(16, 2));

        let Card::Receipt(card) = receipt_card("Adventure Works", &customer, &lines, &totals) else {
            panic!("expected receipt card");
        };
        assert_eq!(card.items.len(), 2);
        assert!(card.items.iter().all(|i| i.quantity == "1"));
        assert_eq!(card.facts[1], Fact::new("E-mail:", "orlando0@adventure-works.com"));
        assert_eq!(card.tax, "1,088.00");
        assert_eq!(card.total, "7,887.98");
    }
}

//! ProductInfo: list products, either the best sellers or by name.

use std::time::Duration;

use crate::domain::classification::{first_of, ClassificationResult, EntityLabel};
use crate::domain::dialogue::{messages, replies, NoActionReason, ReplyAction, TurnOutcome};
use crate::ports::{CatalogLookup, LookupError};

const PRODUCT_LABELS: [EntityLabel; 2] = [EntityLabel::ProductId, EntityLabel::ProductName];

pub async fn handle(
    catalog: &dyn CatalogLookup,
    result: &ClassificationResult,
    reply_delay: Duration,
) -> Result<TurnOutcome, LookupError> {
    let Some(entity) = first_of(&result.entities, &PRODUCT_LABELS) else {
        return Ok(TurnOutcome::NoAction(NoActionReason::NoProductReference));
    };

    let (filter, prefix) = match entity.label {
        EntityLabel::ProductName => (Some(entity.raw_text.as_str()), messages::MATCHING_PRODUCTS),
        _ => (None, messages::TOP_PRODUCTS),
    };

    let products = catalog.products(filter).await?;
    tracing::debug!(filter = ?filter, count = products.len(), "product listing");

    let mut actions = vec![
        ReplyAction::Typing,
        ReplyAction::delay(reply_delay),
        ReplyAction::text(prefix),
    ];
    if products.is_empty() {
        actions.push(ReplyAction::text(messages::NO_RESULTS));
    } else {
        actions.push(ReplyAction::carousel(
            products.iter().map(replies::product_card).collect(),
        ));
    }
    actions.push(ReplyAction::text(messages::WHAT_ELSE));

    Ok(TurnOutcome::Replied(actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalog;
    use crate::domain::catalog::{Money, Product, ProductId};
    use crate::domain::classification::Entity;
    use crate::domain::dialogue::{AttachmentLayout, Card};

    fn product(id: i32, name: &str) -> Product {
        Product {
            product_id: ProductId::new(id),
            name: name.to_string(),
            color: "Silver".to_string(),
            list_price: Money::from_cents(339_999),
            photo_ref: "R0lGODlh".to_string(),
            category: "Mountain Bikes".to_string(),
            model: "Mountain-100".to_string(),
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_product(product(771, "Mountain-100 Silver, 38"))
            .with_product(product(680, "HL Road Frame - Black, 58"))
    }

    fn asking_about(entity: Entity) -> ClassificationResult {
        ClassificationResult::new("tell me", "ProductInfo", 0.8).with_entity(entity)
    }

    #[tokio::test]
    async fn product_name_filters_by_entity_text() {
        let catalog = catalog();
        let result = asking_about(Entity::new(EntityLabel::ProductName, "mountain"));

        let outcome = handle(&catalog, &result, Duration::from_millis(5000)).await.unwrap();

        assert_eq!(catalog.product_queries(), vec![Some("mountain".to_string())]);
        let actions = outcome.actions();
        assert_eq!(actions.len(), 5);
        assert_eq!(actions[0], ReplyAction::Typing);
        assert_eq!(actions[1], ReplyAction::Delay { ms: 5000 });
        assert_eq!(actions[2].as_text(), Some(messages::MATCHING_PRODUCTS));
        match &actions[3] {
            ReplyAction::Cards { layout, cards } => {
                assert_eq!(*layout, AttachmentLayout::Carousel);
                assert_eq!(cards.len(), 1);
                let Card::Hero(hero) = &cards[0] else { panic!("expected hero card") };
                assert_eq!(hero.buttons[0].value, "Add product 771 to the cart");
                assert_eq!(hero.subtitle.as_deref(), Some("3,399.99"));
            }
            other => panic!("expected carousel, got {:?}", other),
        }
        assert_eq!(actions[4].as_text(), Some(messages::WHAT_ELSE));
    }

    #[tokio::test]
    async fn product_id_label_lists_best_sellers() {
        let catalog = catalog();
        let result = asking_about(Entity::new(EntityLabel::ProductId, "products"));

        let outcome = handle(&catalog, &result, Duration::ZERO).await.unwrap();

        assert_eq!(catalog.product_queries(), vec![None]);
        assert_eq!(outcome.actions()[2].as_text(), Some(messages::TOP_PRODUCTS));
    }

    #[tokio::test]
    async fn later_product_entity_is_found() {
        let catalog = catalog();
        let result = ClassificationResult::new("q", "ProductInfo", 0.8)
            .with_entity(Entity::new(EntityLabel::Number, "3"))
            .with_entity(Entity::new(EntityLabel::ProductName, "road"));

        handle(&catalog, &result, Duration::ZERO).await.unwrap();

        assert_eq!(catalog.product_queries(), vec![Some("road".to_string())]);
    }

    #[tokio::test]
    async fn empty_listing_says_no_results() {
        let catalog = catalog();
        let result = asking_about(Entity::new(EntityLabel::ProductName, "unicycle"));

        let outcome = handle(&catalog, &result, Duration::ZERO).await.unwrap();

        let texts: Vec<_> = outcome.actions().iter().filter_map(|a| a.as_text()).collect();
        assert_eq!(
            texts,
            vec![messages::MATCHING_PRODUCTS, messages::NO_RESULTS, messages::WHAT_ELSE]
        );
    }

    #[tokio::test]
    async fn no_product_entity_is_a_no_op() {
        let catalog = catalog();
        let result = ClassificationResult::new("q", "ProductInfo", 0.8)
            .with_entity(Entity::new(EntityLabel::Email, "a@b.c"));

        let outcome = handle(&catalog, &result, Duration::ZERO).await.unwrap();

        assert_eq!(outcome, TurnOutcome::NoAction(NoActionReason::NoProductReference));
        assert_eq!(catalog.lookup_count(), 0);
    }
}

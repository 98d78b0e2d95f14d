use super::*;

#[tokio::test]
async fn test_create_order_with_dependency_met() {
    let (manager, pool) = create_test_manager().await;
    let f = pizza_fixture(&pool).await;

    let receipt = manager
        .create_order(1, f.pizza, f.medium, &[f.mozzarella, f.tomatoes])
        .await
        .unwrap();

    // Medium 7.00 + Mozzarella 1.00 + Tomatoes 0.50
    assert_eq!(receipt.total, 8.5);
    assert_eq!(availability(&pool, f.mozzarella).await, Some(2));
    // Unlimited ingredients are never decremented
    assert_eq!(availability(&pool, f.tomatoes).await, None);
    assert_eq!(association_count(&pool, receipt.order_id).await, 2);
}

#[tokio::test]
async fn test_create_order_without_ingredients() {
    let (manager, pool) = create_test_manager().await;
    let f = pizza_fixture(&pool).await;

    let receipt = manager.create_order(1, f.pizza, f.small, &[]).await.unwrap();

    assert_eq!(receipt.total, 5.0);
    assert_eq!(association_count(&pool, receipt.order_id).await, 0);
}

#[tokio::test]
async fn test_round_trip_restores_everything() {
    let (manager, pool) = create_test_manager().await;
    let f = pizza_fixture(&pool).await;

    let receipt = manager
        .create_order(1, f.pizza, f.medium, &[f.mozzarella, f.tomatoes])
        .await
        .unwrap();
    assert_eq!(availability(&pool, f.mozzarella).await, Some(2));

    let outcome = manager.delete_order(1, receipt.order_id).await.unwrap();

    assert_eq!(outcome.rows_affected, 1);
    assert_eq!(availability(&pool, f.mozzarella).await, Some(3));
    assert_eq!(availability(&pool, f.tomatoes).await, None);
    assert_eq!(association_count(&pool, receipt.order_id).await, 0);
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn test_total_is_snapshotted() {
    let (manager, pool) = create_test_manager().await;
    let f = pizza_fixture(&pool).await;

    let receipt = manager
        .create_order(1, f.pizza, f.medium, &[f.olives])
        .await
        .unwrap();
    assert_eq!(receipt.total, 7.7);

    // A later catalog price change must not touch committed totals
    sqlx::query("UPDATE ingredient SET price = 99.0 WHERE id = ?")
        .bind(f.olives)
        .execute(&pool)
        .await
        .unwrap();

    let orders = manager.orders_for_user(1).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order.total, 7.7);
}

#[tokio::test]
async fn test_orders_for_user_lists_own_orders_with_ingredients() {
    let (manager, pool) = create_test_manager().await;
    let f = pizza_fixture(&pool).await;

    let first = manager
        .create_order(1, f.pizza, f.medium, &[f.mozzarella, f.tomatoes])
        .await
        .unwrap();
    let second = manager.create_order(1, f.pizza, f.small, &[]).await.unwrap();
    manager.create_order(2, f.pizza, f.small, &[f.olives]).await.unwrap();

    let orders = manager.orders_for_user(1).await.unwrap();
    assert_eq!(orders.len(), 2);
    let ids: Vec<i64> = orders.iter().map(|d| d.order.id).collect();
    assert!(ids.contains(&first.order_id));
    assert!(ids.contains(&second.order_id));

    let detail = orders.iter().find(|d| d.order.id == first.order_id).unwrap();
    let mut names: Vec<&str> = detail.ingredients.iter().map(|i| i.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Mozzarella", "Tomatoes"]);
}

#[tokio::test]
async fn test_duplicate_candidates_collapse() {
    let (manager, pool) = create_test_manager().await;
    let f = pizza_fixture(&pool).await;

    let receipt = manager
        .create_order(1, f.pizza, f.medium, &[f.ham, f.ham, f.ham])
        .await
        .unwrap();

    // Counted once: one association row, one reservation, one price share
    assert_eq!(receipt.total, 8.2);
    assert_eq!(association_count(&pool, receipt.order_id).await, 1);
    assert_eq!(availability(&pool, f.ham).await, Some(1));
}

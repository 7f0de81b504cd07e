//! Order store integration tests
//!
//! Exercises the full create/read/update/delete lifecycle against a real
//! temporary file, including the on-disk wire format.

use ordr::domain::{Order, OrderPatch};
use ordr::error::{OrdrError, Result};
use ordr::store::{CsvStore, HEADER, next_id};
use ordr::validation::{validate_draft, validate_patch};
use tempfile::TempDir;

fn temp_store() -> (CsvStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("data").join("orders.csv"));
    (store, temp_dir)
}

/// Integration test: full lifecycle of an order through the public API
#[test]
fn test_order_lifecycle() -> Result<()> {
    let (store, _temp) = temp_store();

    // Create, the way the CLI does: validate, allocate, append
    let draft = validate_draft("Alice", "Widget", 2, None)?;
    let orders = store.read_all()?;
    let order = Order::create(next_id(&orders), draft);
    store.append(&order)?;

    assert_eq!(order.id, 1);
    assert_eq!(order.status, "processing");

    // Read back
    let all = store.read_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].customer, "Alice");

    // Update
    let patch = validate_patch(None, None, Some(5), Some("shipped"))?;
    let updated = store.update(order.id, &patch)?.expect("order exists");
    assert_eq!(updated.qty, 5);
    assert_eq!(updated.status, "shipped");
    assert_eq!(updated.created_at, order.created_at);

    // Delete
    assert!(store.delete(order.id)?);
    assert!(store.read_all()?.is_empty());

    Ok(())
}

/// Integration test: verify the on-disk wire format line by line
#[test]
fn test_wire_format() -> Result<()> {
    let (store, _temp) = temp_store();

    let order = Order {
        id: 1,
        customer: "Alice".to_string(),
        item: "Widget".to_string(),
        qty: 2,
        status: "processing".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    };
    store.append(&order)?;

    let text = std::fs::read_to_string(store.path())?;
    assert_eq!(
        text,
        "id,customer,item,qty,status,createdAt\n1,Alice,Widget,2,processing,2024-01-01T00:00:00Z\n"
    );
    assert!(text.starts_with(HEADER));

    Ok(())
}

/// Integration test: id allocation skips over gaps left by deletes
#[test]
fn test_id_allocation_after_delete() -> Result<()> {
    let (store, _temp) = temp_store();

    for name in ["Alice", "Bob", "Carol"] {
        let draft = validate_draft(name, "Widget", 1, None)?;
        let orders = store.read_all()?;
        store.append(&Order::create(next_id(&orders), draft))?;
    }

    // Remove the middle record; the allocator still goes past the max
    assert!(store.delete(2)?);
    let orders = store.read_all()?;
    assert_eq!(next_id(&orders), 4);

    Ok(())
}

/// Integration test: a second store instance sees what the first wrote
#[test]
fn test_persistence_across_instances() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.csv");

    {
        let store = CsvStore::new(&path);
        let draft = validate_draft("Alice", "Widget", 2, None)?;
        store.append(&Order::create(1, draft))?;
    }

    {
        let store = CsvStore::new(&path);
        let all = store.read_all()?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].customer, "Alice");
    }

    Ok(())
}

/// Integration test: a corrupted header stops the read, a corrupted row does not
#[test]
fn test_corruption_policy() -> Result<()> {
    let (store, _temp) = temp_store();
    store.ensure_storage()?;

    // Bad row: dropped
    std::fs::write(
        store.path(),
        format!("{}\nx,Bob,Gadget,1,processing,2024-01-01\n1,Alice,Widget,2,processing,2024-01-01\n", HEADER),
    )
    .unwrap();
    let all = store.read_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].customer, "Alice");

    // Bad header: fatal
    std::fs::write(store.path(), "id,name,item,qty,status,createdAt\n").unwrap();
    assert!(matches!(store.read_all(), Err(OrdrError::SchemaMismatch { .. })));

    Ok(())
}

/// Integration test: validation keeps separator characters out of the file
#[test]
fn test_validation_protects_wire_format() {
    assert!(validate_draft("Alice, Inc", "Widget", 1, None).is_err());
    assert!(validate_draft("Alice", "Widg\net", 1, None).is_err());
    assert!(validate_patch(None, None, None, Some("on, hold")).is_err());
}

/// Integration test: JSON rendering uses the camelCase createdAt key
#[test]
fn test_json_shape() -> Result<()> {
    let order = Order {
        id: 1,
        customer: "Alice".to_string(),
        item: "Widget".to_string(),
        qty: 2,
        status: "processing".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    };

    let json = serde_json::to_value(&order)?;
    assert_eq!(json["id"], 1);
    assert_eq!(json["customer"], "Alice");
    assert_eq!(json["qty"], 2);
    assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");

    Ok(())
}

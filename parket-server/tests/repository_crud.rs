//! Repository flows against an embedded database: CRUD, uniqueness
//! guards, cascade deletes and catalog snapshots.
//! Run: cargo test -p parket-server --test repository_crud

use parket_server::db::DbService;
use parket_server::db::models::{
    ClientCreate, ClientUpdate, OrderCreate, OrderUpdate, PhaseCreate, ProductCreate,
    ProductUpdate, ProjectCreate, RoomCreate, RoomProductCreate, VariantCreate,
};
use parket_server::db::repository::{
    ClientRepository, OrderRepository, PhaseRepository, ProductRepository, ProjectRepository,
    RepoError, RoomProductRepository, RoomRepository, VariantRepository,
};
use shared::{ConfirmationStatus, DeliveryStatus, OverallStatus, PaymentStatus};
use surrealdb::sql::Thing;

async fn open_db(tmp: &tempfile::TempDir) -> DbService {
    let path = tmp.path().join("parket.db");
    DbService::new(path.to_str().unwrap()).await.unwrap()
}

fn id_of(id: &Option<Thing>) -> String {
    id.as_ref().unwrap().to_string()
}

fn client_payload(name: &str) -> ClientCreate {
    ClientCreate {
        name: name.to_string(),
        contact_person: None,
        phone: None,
        email: None,
        address: None,
        notes: None,
    }
}

fn project_payload(client_id: &str, name: &str) -> ProjectCreate {
    ProjectCreate {
        client: client_id.to_string(),
        name: name.to_string(),
        site_address: None,
        architect: None,
        notes: None,
    }
}

fn phase_payload(project_id: &str, name: &str) -> PhaseCreate {
    PhaseCreate {
        project: project_id.to_string(),
        name: name.to_string(),
        phase_discount: None,
        discount_enabled: None,
        include_architect_commission: None,
        architect_commission_percent: None,
        sort_order: None,
        notes: None,
    }
}

fn variant_payload(phase_id: &str, name: &str) -> VariantCreate {
    VariantCreate {
        phase: phase_id.to_string(),
        name: name.to_string(),
        include_in_offer: None,
        variant_discount: None,
        architect_commission: None,
        notes: None,
    }
}

fn room_payload(variant_id: &str, name: &str, area: f64) -> RoomCreate {
    RoomCreate {
        variant: variant_id.to_string(),
        name: name.to_string(),
        area: Some(area),
        discount: None,
        discount_enabled: None,
        waste_percent: None,
        notes: None,
    }
}

fn line_payload(room_id: &str) -> RoomProductCreate {
    RoomProductCreate {
        room: room_id.to_string(),
        product: None,
        description: Some("Custom skirting".to_string()),
        quantity: Some(12.0),
        unit: Some("lm".to_string()),
        unit_price: Some(8.5),
        discount: None,
        waste_percent: None,
    }
}

// ── Clients ─────────────────────────────────────────────────────────

#[tokio::test]
async fn client_crud_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ClientRepository::new(db.db.clone());

    let created = repo.create(client_payload("Interior Ideas Ltd")).await.unwrap();
    assert!(created.id.is_some());
    assert!(created.created_at > 0);

    let client_id = id_of(&created.id);
    let found = repo.find_by_id(&client_id).await.unwrap().unwrap();
    assert_eq!(found.name, "Interior Ideas Ltd");

    let updated = repo
        .update(
            &client_id,
            ClientUpdate {
                name: None,
                contact_person: Some("Maria Petrova".to_string()),
                phone: Some("+359 88 123 4567".to_string()),
                email: None,
                address: None,
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Interior Ideas Ltd");
    assert_eq!(updated.phone.as_deref(), Some("+359 88 123 4567"));

    assert!(repo.delete(&client_id).await.unwrap());
    assert!(repo.find_by_id(&client_id).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_client_name_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ClientRepository::new(db.db.clone());

    repo.create(client_payload("Parket House")).await.unwrap();
    let err = repo.create(client_payload("Parket House")).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn client_with_projects_cannot_be_deleted() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let clients = ClientRepository::new(db.db.clone());
    let projects = ProjectRepository::new(db.db.clone());

    let client = clients.create(client_payload("Busy Client")).await.unwrap();
    let client_id = id_of(&client.id);
    let project = projects
        .create(project_payload(&client_id, "Apartment 12"))
        .await
        .unwrap();

    let err = clients.delete(&client_id).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // Free of projects the client goes away normally
    projects.delete(&id_of(&project.id)).await.unwrap();
    assert!(clients.delete(&client_id).await.unwrap());
    assert!(clients.find_by_id(&client_id).await.unwrap().is_none());
}

// ── Project tree ────────────────────────────────────────────────────

#[tokio::test]
async fn project_delete_cascades_through_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let clients = ClientRepository::new(db.db.clone());
    let projects = ProjectRepository::new(db.db.clone());
    let phases = PhaseRepository::new(db.db.clone());
    let variants = VariantRepository::new(db.db.clone());
    let rooms = RoomRepository::new(db.db.clone());
    let lines = RoomProductRepository::new(db.db.clone());

    let client = clients.create(client_payload("Cascade Client")).await.unwrap();
    let project = projects
        .create(project_payload(&id_of(&client.id), "House Renovation"))
        .await
        .unwrap();
    let project_id = id_of(&project.id);
    let phase = phases
        .create(phase_payload(&project_id, "Ground Floor"))
        .await
        .unwrap();
    let variant = variants
        .create(variant_payload(&id_of(&phase.id), "Oak Option"))
        .await
        .unwrap();
    let room = rooms
        .create(room_payload(&id_of(&variant.id), "Living Room", 24.0))
        .await
        .unwrap();
    let line = lines.create(line_payload(&id_of(&room.id))).await.unwrap();

    assert!(projects.delete(&project_id).await.unwrap());

    assert!(projects.find_by_id(&project_id).await.unwrap().is_none());
    assert!(phases.find_by_id(&id_of(&phase.id)).await.unwrap().is_none());
    assert!(variants.find_by_id(&id_of(&variant.id)).await.unwrap().is_none());
    assert!(rooms.find_by_id(&id_of(&room.id)).await.unwrap().is_none());
    assert!(lines.find_by_id(&id_of(&line.id)).await.unwrap().is_none());

    // The owning client is untouched
    assert!(clients.find_by_id(&id_of(&client.id)).await.unwrap().is_some());
}

#[tokio::test]
async fn phases_listed_in_sort_order() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let clients = ClientRepository::new(db.db.clone());
    let projects = ProjectRepository::new(db.db.clone());
    let phases = PhaseRepository::new(db.db.clone());

    let client = clients.create(client_payload("Order Client")).await.unwrap();
    let project = projects
        .create(project_payload(&id_of(&client.id), "Office Fit-Out"))
        .await
        .unwrap();
    let project_id = id_of(&project.id);

    for (name, sort_order) in [("Second", 2), ("Zeroth", 0), ("First", 1)] {
        let mut payload = phase_payload(&project_id, name);
        payload.sort_order = Some(sort_order);
        phases.create(payload).await.unwrap();
    }

    let listed = phases.find_by_project(&project_id).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Zeroth", "First", "Second"]);
}

// ── Catalog ─────────────────────────────────────────────────────────

#[tokio::test]
async fn product_create_backfills_prices() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ProductRepository::new(db.db.clone());

    let created = repo
        .create(ProductCreate {
            code: "OAK-100".to_string(),
            name: "Oak Classic".to_string(),
            manufacturer: Some("Weitzer".to_string()),
            category: Some("parquet".to_string()),
            unit: Some("m2".to_string()),
            cost_eur: Some(100.0),
            cost_bgn: None,
            markup: Some(20.0),
            sale_bgn: None,
            sale_eur: None,
            is_active: None,
        })
        .await
        .unwrap();

    assert_eq!(created.cost_bgn, Some(195.6));
    assert_eq!(created.sale_eur, Some(125.0));
    assert_eq!(created.sale_bgn, Some(244.5));
    assert!(created.is_active);
}

#[tokio::test]
async fn product_create_backfills_eur_from_bgn() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ProductRepository::new(db.db.clone());

    let created = repo
        .create(ProductCreate {
            code: "LAM-10".to_string(),
            name: "Laminate Basic".to_string(),
            manufacturer: None,
            category: None,
            unit: Some("m2".to_string()),
            cost_eur: None,
            cost_bgn: Some(195.6),
            markup: None,
            sale_bgn: None,
            sale_eur: None,
            is_active: None,
        })
        .await
        .unwrap();

    assert_eq!(created.cost_eur, Some(100.0));
    // No markup, no sale derivation
    assert_eq!(created.sale_bgn, None);
    assert_eq!(created.sale_eur, None);
}

#[tokio::test]
async fn markup_at_hundred_leaves_sale_unset() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ProductRepository::new(db.db.clone());

    let created = repo
        .create(ProductCreate {
            code: "BAD-MARKUP".to_string(),
            name: "Mispriced".to_string(),
            manufacturer: None,
            category: None,
            unit: None,
            cost_eur: None,
            cost_bgn: Some(100.0),
            markup: Some(100.0),
            sale_bgn: None,
            sale_eur: None,
            is_active: None,
        })
        .await
        .unwrap();

    assert_eq!(created.markup, Some(100.0));
    assert_eq!(created.sale_bgn, None);
    assert_eq!(created.sale_eur, None);
}

#[tokio::test]
async fn explicit_sale_price_wins_over_derivation() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ProductRepository::new(db.db.clone());

    let created = repo
        .create(ProductCreate {
            code: "EXPL-1".to_string(),
            name: "Hand Priced".to_string(),
            manufacturer: None,
            category: None,
            unit: None,
            cost_eur: Some(100.0),
            cost_bgn: None,
            markup: Some(20.0),
            sale_bgn: Some(300.0),
            sale_eur: None,
            is_active: None,
        })
        .await
        .unwrap();

    assert_eq!(created.sale_bgn, Some(300.0));
    // The missing EUR sale is still derived from the EUR cost
    assert_eq!(created.sale_eur, Some(125.0));
}

#[tokio::test]
async fn duplicate_product_code_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ProductRepository::new(db.db.clone());

    let payload = ProductCreate {
        code: "DUP-1".to_string(),
        name: "First".to_string(),
        manufacturer: None,
        category: None,
        unit: None,
        cost_eur: None,
        cost_bgn: None,
        markup: None,
        sale_bgn: None,
        sale_eur: None,
        is_active: None,
    };
    repo.create(payload.clone()).await.unwrap();
    let err = repo.create(payload).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn product_update_does_not_rederive_prices() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ProductRepository::new(db.db.clone());

    let created = repo
        .create(ProductCreate {
            code: "UPD-1".to_string(),
            name: "Stable".to_string(),
            manufacturer: None,
            category: None,
            unit: None,
            cost_eur: Some(100.0),
            cost_bgn: None,
            markup: Some(20.0),
            sale_bgn: None,
            sale_eur: None,
            is_active: None,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            &id_of(&created.id),
            ProductUpdate {
                code: None,
                name: None,
                manufacturer: None,
                category: None,
                unit: None,
                cost_eur: Some(200.0),
                cost_bgn: None,
                markup: None,
                sale_bgn: None,
                sale_eur: None,
                is_active: None,
            },
        )
        .await
        .unwrap();

    // Updates store what was sent; derived fields stay as created
    assert_eq!(updated.cost_eur, Some(200.0));
    assert_eq!(updated.cost_bgn, Some(195.6));
    assert_eq!(updated.sale_bgn, Some(244.5));
    assert_eq!(updated.sale_eur, Some(125.0));
}

// ── Line item snapshots ─────────────────────────────────────────────

async fn room_for_lines(db: &DbService) -> String {
    let client = ClientRepository::new(db.db.clone())
        .create(client_payload("Snapshot Client"))
        .await
        .unwrap();
    let project = ProjectRepository::new(db.db.clone())
        .create(project_payload(&id_of(&client.id), "Snapshot Project"))
        .await
        .unwrap();
    let phase = PhaseRepository::new(db.db.clone())
        .create(phase_payload(&id_of(&project.id), "Phase 1"))
        .await
        .unwrap();
    let variant = VariantRepository::new(db.db.clone())
        .create(variant_payload(&id_of(&phase.id), "Variant A"))
        .await
        .unwrap();
    let room = RoomRepository::new(db.db.clone())
        .create(room_payload(&id_of(&variant.id), "Bedroom", 16.0))
        .await
        .unwrap();
    id_of(&room.id)
}

#[tokio::test]
async fn line_snapshot_copied_from_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let products = ProductRepository::new(db.db.clone());
    let lines = RoomProductRepository::new(db.db.clone());

    let room_id = room_for_lines(&db).await;
    let product = products
        .create(ProductCreate {
            code: "OAK-200".to_string(),
            name: "Oak Rustic".to_string(),
            manufacturer: None,
            category: Some("parquet".to_string()),
            unit: Some("m2".to_string()),
            cost_eur: None,
            cost_bgn: Some(78.24),
            markup: Some(20.0),
            sale_bgn: None,
            sale_eur: None,
            is_active: None,
        })
        .await
        .unwrap();
    let product_id = id_of(&product.id);

    let line = lines
        .create(RoomProductCreate {
            room: room_id,
            product: Some(product_id.clone()),
            description: None,
            quantity: Some(10.0),
            unit: None,
            unit_price: None,
            discount: None,
            waste_percent: None,
        })
        .await
        .unwrap();

    assert_eq!(line.description.as_deref(), Some("Oak Rustic"));
    assert_eq!(line.unit.as_deref(), Some("m2"));
    assert_eq!(line.unit_price, Some(97.8));

    // Catalog edits after the fact leave the stored line alone
    products
        .update(
            &product_id,
            ProductUpdate {
                code: None,
                name: Some("Oak Rustic XL".to_string()),
                manufacturer: None,
                category: None,
                unit: None,
                cost_eur: None,
                cost_bgn: None,
                markup: None,
                sale_bgn: Some(150.0),
                sale_eur: None,
                is_active: None,
            },
        )
        .await
        .unwrap();

    let stored = lines.find_by_id(&id_of(&line.id)).await.unwrap().unwrap();
    assert_eq!(stored.description.as_deref(), Some("Oak Rustic"));
    assert_eq!(stored.unit_price, Some(97.8));

    // Deleting the catalog record does not orphan the line either
    products.delete(&product_id).await.unwrap();
    let stored = lines.find_by_id(&id_of(&line.id)).await.unwrap().unwrap();
    assert_eq!(stored.unit_price, Some(97.8));
}

#[tokio::test]
async fn line_explicit_fields_beat_catalog_copy() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let products = ProductRepository::new(db.db.clone());
    let lines = RoomProductRepository::new(db.db.clone());

    let room_id = room_for_lines(&db).await;
    let product = products
        .create(ProductCreate {
            code: "OAK-300".to_string(),
            name: "Oak Select".to_string(),
            manufacturer: None,
            category: None,
            unit: Some("m2".to_string()),
            cost_eur: None,
            cost_bgn: None,
            markup: None,
            sale_bgn: Some(120.0),
            sale_eur: None,
            is_active: None,
        })
        .await
        .unwrap();

    let line = lines
        .create(RoomProductCreate {
            room: room_id,
            product: Some(id_of(&product.id)),
            description: Some("Negotiated price".to_string()),
            quantity: Some(5.0),
            unit: None,
            unit_price: Some(99.0),
            discount: None,
            waste_percent: None,
        })
        .await
        .unwrap();

    assert_eq!(line.description.as_deref(), Some("Negotiated price"));
    assert_eq!(line.unit_price, Some(99.0));
    assert_eq!(line.unit.as_deref(), Some("m2"));
}

#[tokio::test]
async fn line_with_missing_catalog_product_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let lines = RoomProductRepository::new(db.db.clone());

    let room_id = room_for_lines(&db).await;
    let err = lines
        .create(RoomProductCreate {
            room: room_id,
            product: Some("product:doesnotexist".to_string()),
            description: None,
            quantity: None,
            unit: None,
            unit_price: None,
            discount: None,
            waste_percent: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

// ── Documents ───────────────────────────────────────────────────────

#[tokio::test]
async fn order_number_generated_when_absent() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = OrderRepository::new(db.db.clone());

    let created = repo
        .create(OrderCreate {
            number: None,
            client: None,
            project: None,
            supplier: Some("Hamberger".to_string()),
            description: None,
            amount: Some(1500.0),
            confirmation_status: None,
            payment_status: None,
            delivery_status: None,
            expected_delivery: None,
            notes: None,
        })
        .await
        .unwrap();

    assert!(created.number > 0);
    let by_number = repo.find_by_number(created.number).await.unwrap().unwrap();
    assert_eq!(id_of(&by_number.id), id_of(&created.id));
}

#[tokio::test]
async fn duplicate_order_number_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = OrderRepository::new(db.db.clone());

    let payload = OrderCreate {
        number: Some(1001),
        client: None,
        project: None,
        supplier: None,
        description: None,
        amount: None,
        confirmation_status: None,
        payment_status: None,
        delivery_status: None,
        expected_delivery: None,
        notes: None,
    };
    repo.create(payload.clone()).await.unwrap();
    let err = repo.create(payload).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn order_status_fields_round_trip_and_resolve() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = OrderRepository::new(db.db.clone());

    let created = repo
        .create(OrderCreate {
            number: Some(2001),
            client: None,
            project: None,
            supplier: Some("BOEN".to_string()),
            description: None,
            amount: Some(900.0),
            confirmation_status: Some(ConfirmationStatus::Confirmed),
            payment_status: Some(PaymentStatus::Paid),
            delivery_status: Some(DeliveryStatus::InTransit),
            expected_delivery: None,
            notes: None,
        })
        .await
        .unwrap();

    let stored = repo.find_by_id(&id_of(&created.id)).await.unwrap().unwrap();
    assert_eq!(stored.confirmation_status, ConfirmationStatus::Confirmed);
    assert_eq!(stored.payment_status, PaymentStatus::Paid);
    assert_eq!(stored.delivery_status, DeliveryStatus::InTransit);
    let overall = OverallStatus::resolve(
        stored.confirmation_status,
        stored.payment_status,
        stored.delivery_status,
    );
    assert_eq!(overall.label(), "IN_DELIVERY");

    // A payment rollback pulls the displayed status back behind delivery
    let updated = repo
        .update(
            &id_of(&created.id),
            OrderUpdate {
                supplier: None,
                description: None,
                amount: None,
                confirmation_status: None,
                payment_status: Some(PaymentStatus::Partial),
                delivery_status: None,
                expected_delivery: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.payment_status, PaymentStatus::Partial);
    assert_eq!(updated.delivery_status, DeliveryStatus::InTransit);
    let overall = OverallStatus::resolve(
        updated.confirmation_status,
        updated.payment_status,
        updated.delivery_status,
    );
    assert_eq!(overall, OverallStatus::PartiallyPaid);
}

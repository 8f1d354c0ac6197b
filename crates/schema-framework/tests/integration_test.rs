use std::time::Duration;

use schema_framework::mock::MockTransport;
use schema_framework::object::{decode_tagged, selection_set};
use schema_framework::scalars::{self, Boolean, Float, Int, Output, ID};
use schema_framework::{
    derive_shape, graphql_object, DataAccessClient, DataAccessError, EntitySource, GraphQLObject,
    Incremental, PartialObject, ShapeError, StoreActor, TransportError, TransportSource,
};
use serde_json::json;

// --- Test Entity ---

graphql_object! {
    /// A catalogued book.
    pub struct Book as "Book" {
        #[id]
        id: Output<ID>,
        title: Output<scalars::String>,
        pages: Output<Int>,
        rating: Output<Float>,
        in_print: Output<Boolean>,
    }
}

derive_shape! {
    /// What a public listing shows.
    pub struct BookListing from Book {
        required id: Output<ID>,
        required title: Output<scalars::String>,
        empty pages: Output<Int>,
        optional rating: Output<Float>,
        maybe in_print: Output<Boolean>,
    }
}

fn book(id: &str, title: &str) -> Book {
    Book::new(id, title, 320, 4.5, true)
}

#[derive(Debug, thiserror::Error)]
enum BookError {
    #[error(transparent)]
    Access(#[from] DataAccessError),
}

struct BookClient {
    source: Box<dyn EntitySource<Book>>,
}

impl DataAccessClient<Book> for BookClient {
    type Error = BookError;

    fn source(&self) -> &dyn EntitySource<Book> {
        self.source.as_ref()
    }
}

// --- Store ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = StoreActor::with_entities(10, vec![book("b1", "Dune"), book("b2", "Emma")]);
    tokio::spawn(actor.run());

    // 1. Lookup
    let found = client.fetch_entity("b2").await.unwrap();
    assert_eq!(found.title(), "Emma");
    assert_eq!(found.typename(), "Book");

    // 2. Upsert an existing id keeps its position
    client.insert(book("b1", "Dune Messiah")).await.unwrap();
    // 3. New ids are appended
    client.insert(book("b3", "Ulysses")).await.unwrap();

    let all = client.fetch_all_entities().await.unwrap();
    let titles: Vec<&str> = all.iter().map(|b| b.title().as_str()).collect();
    assert_eq!(titles, ["Dune Messiah", "Emma", "Ulysses"]);

    // 4. Unknown and empty ids
    assert_eq!(
        client.fetch_entity("b9").await,
        Err(DataAccessError::NotFound {
            typename: "Book",
            id: "b9".to_string()
        })
    );
    assert!(matches!(
        client.fetch_entity("").await,
        Err(DataAccessError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let (actor, client) = StoreActor::<Book>::new(4);
    assert!(actor.is_empty());
    tokio::spawn(actor.run());
    assert_eq!(client.fetch_all_entities().await.unwrap(), Vec::<Book>::new());
}

#[tokio::test]
async fn test_stopped_store_is_a_transport_failure() {
    let (actor, client) = StoreActor::with_entities(4, vec![book("b1", "Dune")]);
    drop(actor);

    let err = client.fetch_entity("b1").await.unwrap_err();
    assert!(err.is_transport(), "{err}");
}

#[tokio::test]
async fn test_concurrent_fetches_share_one_store() {
    let (actor, client) = StoreActor::with_entities(2, (1..=20).map(|i| book(&format!("b{i}"), "T")));
    tokio::spawn(actor.run());

    let handles: Vec<_> = (1..=20)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.fetch_entity(&format!("b{i}")).await })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let fetched = handle.await.unwrap().unwrap();
        assert_eq!(fetched.id(), &format!("b{}", i + 1));
    }
}

#[tokio::test]
async fn test_client_trait_defaults_map_errors() {
    let (actor, store) = StoreActor::with_entities(4, vec![book("b1", "Dune")]);
    tokio::spawn(actor.run());
    let client = BookClient {
        source: Box::new(store),
    };

    assert_eq!(client.fetch("b1").await.unwrap().pages(), &320);
    assert_eq!(client.fetch_all().await.unwrap().len(), 1);
    let err = client.fetch("b2").await.unwrap_err();
    assert!(matches!(
        err,
        BookError::Access(DataAccessError::NotFound { .. })
    ));
}

// --- Shapes ---

#[test]
fn test_book_rejects_unknown_keys_and_foreign_typename() {
    let wire = json!({"id": "b1", "title": "Dune", "pages": 1, "rating": 1.0, "in_print": false});
    assert!(serde_json::from_value::<Book>(wire.clone()).is_ok());

    let mut extra = wire.clone();
    extra["isbn"] = json!("x");
    assert!(serde_json::from_value::<Book>(extra).is_err());

    let mut foreign = wire;
    foreign["__typename"] = json!("Magazine");
    assert!(serde_json::from_value::<Book>(foreign).is_err());
}

#[test]
fn test_typename_is_serialized_only_when_set() {
    let plain = serde_json::to_value(book("b1", "Dune")).unwrap();
    assert!(plain.get("__typename").is_none());

    let tagged = book("b1", "Dune").with_typename();
    assert!(tagged.has_typename());
    let wire = serde_json::to_value(&tagged).unwrap();
    assert_eq!(wire["__typename"], "Book");
    assert_eq!(decode_tagged::<Book>(&wire).unwrap().unwrap(), tagged);
    assert!(decode_tagged::<Book>(&json!({"__typename": "Magazine"})).is_none());
}

#[test]
fn test_derived_shape_applies_each_mode() {
    let listing = BookListing::from(&book("b1", "Dune"));
    assert_eq!(listing.rating, Some(4.5));
    assert_eq!(*listing.in_print, Some(true));
    let wire = serde_json::to_value(&listing).unwrap();
    assert_eq!(
        wire,
        json!({"id": "b1", "title": "Dune", "rating": 4.5, "in_print": true})
    );

    let minimal: BookListing =
        serde_json::from_value(json!({"id": "b1", "title": "Dune", "in_print": null})).unwrap();
    assert_eq!(minimal.rating, None);
    assert!(minimal.in_print.is_null());

    // maybe: key must be present
    assert!(serde_json::from_value::<BookListing>(json!({"id": "b1", "title": "Dune"})).is_err());
    // empty: key must be absent
    assert!(serde_json::from_value::<BookListing>(
        json!({"id": "b1", "title": "Dune", "in_print": null, "pages": 3})
    )
    .is_err());
}

#[test]
fn test_incremental_deliveries_merge_to_completion() {
    let first: Incremental<Book> =
        serde_json::from_value(json!({"__typename": "Book", "id": "b1", "title": "Dune"})).unwrap();
    assert!(!first.is_complete());

    let err = first.clone().into_complete().unwrap_err();
    assert_eq!(
        err,
        ShapeError::Incomplete {
            typename: "Book",
            missing: vec!["pages", "rating", "in_print"],
        }
    );

    let second: Incremental<Book> =
        serde_json::from_value(json!({"pages": 320, "rating": 4.5, "in_print": true})).unwrap();
    let merged = first.merge(second);
    assert!(merged.is_complete());
    let full = merged.into_complete().unwrap();
    assert_eq!(full, book("b1", "Dune").with_typename());
}

#[test]
fn test_partial_tracks_metadata_only_deliveries() {
    let meta: Incremental<Book> =
        serde_json::from_value(json!({"__typename": "Book", " $fragmentName": "BookFields"}))
            .unwrap();
    let Incremental::Partial(partial) = meta else {
        panic!("metadata-only delivery decoded as complete");
    };
    assert!(partial.is_metadata_only());
    assert_eq!(partial.fragment_name.as_deref(), Some("BookFields"));
    assert_eq!(partial.missing_fields(), Book::FIELDS);
}

#[test]
fn test_fragment_delivery_with_every_field_is_complete() {
    let delivery: Incremental<Book> = serde_json::from_value(json!({
        "__typename": "Book",
        " $fragmentName": "BookFields",
        "id": "b1",
        "title": "Dune",
        "pages": 320,
        "rating": 4.5,
        "in_print": true,
    }))
    .unwrap();
    assert!(delivery.is_complete());
    assert_eq!(delivery.into_complete().unwrap(), book("b1", "Dune").with_typename());
}

// --- Transport ---

#[tokio::test]
async fn test_transport_source_builds_one_query_per_call() {
    let mock = MockTransport::new();
    mock.expect_query("QueryBook").return_ok(json!({"data": {"book":
        {"id": "b1", "title": "Dune", "pages": 320, "rating": 4.5, "in_print": true}}}));
    mock.expect_query("QueryBooks")
        .return_ok(json!({"data": {"books": []}}));

    let source = TransportSource::<Book, _>::new(mock.clone());
    assert_eq!(source.fetch_entity("b1").await.unwrap(), book("b1", "Dune"));
    assert!(source.fetch_all_entities().await.unwrap().is_empty());

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].query.contains(&selection_set::<Book>()));
    assert!(requests[0].query.contains("book(id: $id)"));
    assert_eq!(requests[0].variables.as_ref().map(|v| v.id.as_str()), Some("b1"));
    assert!(requests[1].variables.is_none());
    mock.verify();
}

#[tokio::test]
async fn test_transport_source_times_out() {
    let mock = MockTransport::new();
    mock.expect_query("QueryBooks")
        .return_after(Duration::from_millis(500), json!({"data": {"books": []}}));
    mock.expect_query("QueryBooks")
        .return_err(TransportError::TimedOut);

    let source =
        TransportSource::<Book, _>::new(mock.clone()).with_timeout(Duration::from_millis(20));
    assert_eq!(
        source.fetch_all_entities().await,
        Err(DataAccessError::Timeout(Duration::from_millis(20)))
    );
    assert_eq!(
        source.fetch_all_entities().await,
        Err(DataAccessError::Timeout(Duration::from_millis(20)))
    );
    mock.verify();
}

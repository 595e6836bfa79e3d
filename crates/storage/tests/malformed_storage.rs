//! Loading data that was written by something other than the catalog.

use folio_storage::{BOOKS_KEY, CHARACTERS_KEY, Catalog, FilesystemStore, MemoryStore};
use folio_types::{BookId, NewBook};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_files_load_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemStore::new(temp_dir.path().join("never-created"));

    let catalog = Catalog::load(store).await.unwrap();

    assert!(catalog.books().is_empty());
    assert!(catalog.characters().is_empty());
}

#[tokio::test]
async fn test_corrupt_collection_only_affects_itself() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("books.json"),
        r#"[{"id": 1, "title": "Dune", "author": "Herbert"}]"#,
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("characters.json"), "{ truncated").unwrap();

    let catalog = Catalog::load(FilesystemStore::new(temp_dir.path()))
        .await
        .unwrap();

    assert_eq!(catalog.books().len(), 1);
    assert_eq!(catalog.books()[0].id, BookId(1));
    assert!(catalog.characters().is_empty());
}

#[tokio::test]
async fn test_wrong_container_shape_loads_as_empty() {
    let store = MemoryStore::new()
        .with_entry(BOOKS_KEY, r#"{"books": []}"#)
        .with_entry(CHARACTERS_KEY, "42");

    let catalog = Catalog::load(store).await.unwrap();

    assert!(catalog.books().is_empty());
    assert!(catalog.characters().is_empty());
}

#[tokio::test]
async fn test_loose_records_are_accepted() {
    // String bookId, null optionals and unknown fields
    let books = r#"[
        {"id": 1700000000000, "title": "Dune", "author": "Herbert",
         "coverImage": null, "readStatus": "Reading", "notes": "", "rating": 5}
    ]"#;
    let characters = r#"[
        {"id": 1700000000500, "name": "Paul", "image": "", "origin": "Caladan",
         "family": "Atreides", "summary": "", "backstory": "", "bookId": "1700000000000"}
    ]"#;
    let store = MemoryStore::new()
        .with_entry(BOOKS_KEY, books)
        .with_entry(CHARACTERS_KEY, characters);

    let mut catalog = Catalog::load(store).await.unwrap();

    let dune = catalog.book(BookId(1_700_000_000_000)).unwrap().clone();
    assert_eq!(dune.cover_image, "");
    assert_eq!(catalog.characters_for_book(dune.id).len(), 1);

    // New ids never collide with the loaded ones
    let added = catalog.add_book(NewBook::new("Emma", "Austen")).await.unwrap();
    assert!(added.id > dune.id);
}

#[tokio::test]
async fn test_writes_replace_a_corrupt_payload() {
    let store = MemoryStore::new().with_entry(BOOKS_KEY, "garbage");
    let mut catalog = Catalog::load(store).await.unwrap();

    catalog.add_book(NewBook::new("A", "B")).await.unwrap();

    let raw = catalog.store().raw(BOOKS_KEY).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

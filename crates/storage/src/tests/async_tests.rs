use super::{create_test_fields, create_test_storage};
use crate::{BookListQuery, BookStore, HistoryStore, UpdateOutcome};
use webshelf_core::BookFields;

#[tokio::test]
async fn test_trait_round_trip_through_blocking_pool() {
    let (storage, _temp_dir) = create_test_storage();

    let book = BookStore::insert_book(&storage, &create_test_fields("Async Book")).await.unwrap();
    let listed = BookStore::list_books(&storage, &BookListQuery::all()).await.unwrap();
    assert_eq!(listed, [book.clone()]);

    let edited = BookFields { current_chapter: "2".to_owned(), ..book.fields.clone() };
    let outcome = BookStore::update_book(&storage, book.id, &edited).await.unwrap();
    assert!(matches!(outcome, UpdateOutcome::Updated(ref b) if b.fields == edited));

    let deleted = BookStore::delete_book(&storage, book.id).await.unwrap();
    assert_eq!(deleted.fields, edited);
    assert!(BookStore::get_book(&storage, book.id).await.unwrap_err().is_not_found());

    let history = HistoryStore::list_history(&storage, None).await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(BookStore::count_books(&storage, None).await.unwrap(), 0);
}

#[tokio::test]
async fn test_concurrent_inserts_are_all_recorded() {
    let (storage, _temp_dir) = create_test_storage();
    let mut handles = Vec::new();
    for i in 0..16 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            BookStore::insert_book(&storage, &create_test_fields(&format!("Book {i}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(BookStore::count_books(&storage, None).await.unwrap(), 16);
    assert_eq!(HistoryStore::list_history(&storage, None).await.unwrap().len(), 16);
}

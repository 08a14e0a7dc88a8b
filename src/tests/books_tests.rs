#[cfg(test)]
mod tests {
    use crate::books::BookService;
    use crate::store::{BookStore, JsonFileStore, MemoryStore};
    use crate::tests::book;
    use crate::types::Book;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn service_with(books: Vec<Book>) -> (BookService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_books(books));
        (BookService::new(store.clone(), true), store)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (svc, _) = service_with(vec![]);
        let mut b = book("b1", "Dune", "desert planet");
        b.price = 9.99;
        b.quantity = 3;

        let created = svc.create(b.clone()).await.unwrap();
        assert_eq!(created, b);
        assert_eq!(svc.get("b1").await, Some(b));
    }

    #[tokio::test]
    async fn test_create_appends_duplicates() {
        let (svc, store) = service_with(vec![book("b1", "First", "")]);
        svc.create(book("b1", "Second", "")).await.unwrap();

        let all = store.load().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].title, "Second");
        // First match wins on lookup
        assert_eq!(svc.get("b1").await.unwrap().title, "First");
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (svc, _) = service_with(vec![book("b1", "Dune", "")]);
        assert!(svc.get("b2").await.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let mut original = book("b1", "Dune", "desert planet");
        original.price = 9.99;
        let (svc, _) = service_with(vec![original]);

        let replacement = book("b1", "Dune Messiah", "");
        let updated = svc.update("b1", replacement.clone()).await.unwrap();
        assert_eq!(updated, Some(replacement.clone()));

        let stored = svc.get("b1").await.unwrap();
        assert_eq!(stored, replacement);
        assert_eq!(stored.price, 0.0);
    }

    #[tokio::test]
    async fn test_update_does_not_resync_path_id() {
        let (svc, _) = service_with(vec![book("b1", "Dune", "")]);
        svc.update("b1", book("b9", "Renamed", "")).await.unwrap();

        assert!(svc.get("b1").await.is_none());
        assert_eq!(svc.get("b9").await.unwrap().title, "Renamed");
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_alone() {
        let (svc, store) = service_with(vec![book("b1", "Dune", "")]);
        let res = svc.update("zz", book("zz", "Ghost", "")).await.unwrap();
        assert!(res.is_none());
        assert_eq!(store.load().await, vec![book("b1", "Dune", "")]);
    }

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let (svc, store) =
            service_with(vec![book("a", "A", ""), book("b", "B", ""), book("c", "C", "")]);
        assert!(svc.delete("b").await.unwrap());

        let ids: Vec<String> = store.load().await.into_iter().map(|b| b.book_id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_delete_removes_only_first_duplicate() {
        let (svc, store) = service_with(vec![book("d", "One", ""), book("d", "Two", "")]);
        assert!(svc.delete("d").await.unwrap());

        let remaining = store.load().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Two");
    }

    #[tokio::test]
    async fn test_repeated_delete_is_not_found() {
        let (svc, store) = service_with(vec![book("a", "A", ""), book("b", "B", "")]);
        assert!(svc.delete("a").await.unwrap());
        assert!(!svc.delete("a").await.unwrap());
        assert!(!svc.delete("a").await.unwrap());
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_serialized_writes_keep_every_create() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("books.json")));
        let svc = BookService::new(store.clone(), true);

        let mut handles = Vec::new();
        for i in 0..25 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                svc.create(book(&format!("b{}", i), "Title", "")).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(store.load().await.len(), 25);
    }

    #[tokio::test]
    async fn test_list_returns_store_contents() {
        let books = vec![book("a", "A", ""), book("b", "B", "")];
        let (svc, _) = service_with(books.clone());
        assert_eq!(svc.list().await, books);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SearchError;
    use crate::search::{chunk_ranges, matches, SearchEngine, WorkerPool};
    use crate::tests::book;
    use crate::types::Book;
    use std::time::Duration;

    fn catalogue() -> Vec<Book> {
        vec![
            book("1", "Dune", "desert planet"),
            book("2", "Emma", "a comedy of manners"),
            book("3", "Dune Messiah", "sequel"),
            book("4", "Solaris", "an ocean PLANET"),
            book("5", "Neuromancer", "cyberspace"),
        ]
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.book_id.as_str()).collect()
    }

    #[test]
    fn test_chunk_ranges_even_split() {
        assert_eq!(chunk_ranges(4, 2), vec![0..2, 2..4]);
    }

    #[test]
    fn test_chunk_ranges_last_takes_remainder() {
        assert_eq!(chunk_ranges(5, 2), vec![0..3, 3..5]);
        assert_eq!(chunk_ranges(7, 3), vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_chunk_ranges_empty_collection() {
        assert_eq!(chunk_ranges(0, 2), vec![0..0, 0..0]);
    }

    #[test]
    fn test_chunk_ranges_more_workers_than_items() {
        let ranges = chunk_ranges(1, 4);
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[0], 0..1);
        assert!(ranges[1..].iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_chunk_ranges_cover_everything_once() {
        for len in 0..20 {
            for workers in 1..6 {
                let covered: Vec<usize> = chunk_ranges(len, workers).into_iter().flatten().collect();
                assert_eq!(covered, (0..len).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_matches_title_or_description_case_insensitive() {
        let b = book("1", "The Left Hand of Darkness", "Winter planet Gethen");
        assert!(matches(&b, "left hand"));
        assert!(matches(&b, "gethen"));
        assert!(matches(&b, ""));
        assert!(!matches(&b, "summer"));
    }

    #[tokio::test]
    async fn test_search_keeps_collection_order() {
        let engine = SearchEngine::new(2);
        let results = engine.search(catalogue(), "planet").await.unwrap();
        assert_eq!(ids(&results), vec!["1", "4"]);

        let results = engine.search(catalogue(), "DUNE").await.unwrap();
        assert_eq!(ids(&results), vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_search_empty_query_returns_everything() {
        let engine = SearchEngine::new(2);
        let results = engine.search(catalogue(), "").await.unwrap();
        assert_eq!(results, catalogue());
    }

    #[tokio::test]
    async fn test_search_empty_collection() {
        let engine = SearchEngine::new(2);
        assert!(engine.search(vec![], "dune").await.unwrap().is_empty());
        assert!(engine.search(vec![], "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_result_independent_of_worker_count() {
        let expected = SearchEngine::new(1).search(catalogue(), "an").await.unwrap();
        for workers in 2..=8 {
            let got = SearchEngine::new(workers).search(catalogue(), "an").await.unwrap();
            assert_eq!(got, expected, "workers = {}", workers);
        }
    }

    #[test]
    fn test_zero_workers_clamped_to_one() {
        assert_eq!(SearchEngine::new(0).workers(), 1);
    }

    #[tokio::test]
    async fn test_pool_reassembles_by_index() {
        let mut pool = WorkerPool::new(3);
        pool.submit(0, || {
            std::thread::sleep(Duration::from_millis(60));
            "slow"
        });
        pool.submit(1, || {
            std::thread::sleep(Duration::from_millis(20));
            "medium"
        });
        pool.submit(2, || "fast");
        assert_eq!(pool.submitted(), 3);

        assert_eq!(pool.join().await.unwrap(), vec!["slow", "medium", "fast"]);
    }

    #[tokio::test]
    async fn test_pool_orders_by_index_not_submission() {
        let mut pool = WorkerPool::new(3);
        pool.submit(2, || "third");
        pool.submit(0, || "first");
        pool.submit(1, || "second");

        assert_eq!(pool.join().await.unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_pool_more_jobs_than_capacity() {
        let mut pool = WorkerPool::new(1);
        for i in 0..10 {
            pool.submit(i, move || i * 2);
        }
        assert_eq!(pool.join().await.unwrap(), (0..10).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_pool_reports_lost_worker() {
        let mut pool = WorkerPool::new(2);
        pool.submit(0, || 1);
        pool.submit(1, || -> i32 { panic!("worker blew up") });

        match pool.join().await {
            Err(SearchError::WorkerLost { chunk }) => assert_eq!(chunk, 1),
            other => panic!("expected WorkerLost, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pool_with_no_jobs() {
        let pool: WorkerPool<u8> = WorkerPool::new(0);
        assert!(pool.join().await.unwrap().is_empty());
    }
}

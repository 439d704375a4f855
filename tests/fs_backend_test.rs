use libris::model::{Book, BookId, SearchField, Status};
use libris::store::backend::StorageBackend;
use libris::store::fs_backend::FsBackend;
use libris::store::BookStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("library_books.json"));
    (dir, backend)
}

fn sample() -> Vec<Book> {
    vec![
        Book::from_parts("1", "Book A", "Author A", 2000, Status::Available),
        Book::from_parts("2", "Book B", "Author B", 2010, Status::CheckedOut),
    ]
}

#[test]
fn test_missing_file_reads_empty() {
    let (_dir, backend) = setup();
    assert!(backend.read_catalog().unwrap().is_empty());
}

#[test]
fn test_round_trip_preserves_order_and_values() {
    let (_dir, backend) = setup();
    let mut books = sample();
    books.reverse();

    backend.write_catalog(&books).unwrap();
    assert_eq!(backend.read_catalog().unwrap(), books);
}

#[test]
fn test_file_format() {
    let (dir, backend) = setup();
    backend
        .write_catalog(&[Book::from_parts(
            "1",
            "Мастер и Маргарита",
            "Булгаков",
            1967,
            Status::Available,
        )])
        .unwrap();

    let on_disk = fs::read_to_string(dir.path().join("library_books.json")).unwrap();
    let expected = r#"[
    {
        "title": "Мастер и Маргарита",
        "author": "Булгаков",
        "year": 1967,
        "id": "1",
        "status": "available"
    }
]"#;
    assert_eq!(on_disk, expected);
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    backend.write_catalog(&sample()).unwrap();
    backend.write_catalog(&sample()[..1]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_creates_missing_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("books.json");
    let backend = FsBackend::new(&path);

    backend.write_catalog(&sample()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_is_an_error_for_backend_but_empty_for_store() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("library_books.json"), "{ this is not json").unwrap();
    assert!(backend.read_catalog().is_err());

    let store = BookStore::new(backend);
    assert!(store.load_all().is_empty());
}

#[test]
fn test_non_array_json_loads_empty() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("library_books.json"),
        r#"{"title": "not an array"}"#,
    )
    .unwrap();

    let store = BookStore::new(backend);
    assert!(store.load_all().is_empty());
}

#[test]
fn test_legacy_catalog_loads() {
    let (dir, backend) = setup();
    let legacy = r#"[
    {
        "title": "Война и мир",
        "author": "Лев Толстой",
        "year": "1869",
        "id": "3f2c1a7e-9f53-4a2b-8d41-2b1c5e0e7a10",
        "status": "В наличии"
    },
    {
        "title": "Анна Каренина",
        "author": "Лев Толстой",
        "year": "1877",
        "id": "8a1d5c44-3e2b-4f61-b0a9-7d3c2e1f0b55",
        "status": "Выдана"
    }
]"#;
    fs::write(dir.path().join("library_books.json"), legacy).unwrap();

    let store = BookStore::new(backend);
    let books = store.load_all();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].year(), 1869);
    assert_eq!(books[0].status(), Status::Available);
    assert_eq!(books[1].status(), Status::CheckedOut);

    let found = store.find_by_field("1877", SearchField::Year);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "Анна Каренина");
}

#[test]
fn test_store_operations_persist_across_instances() {
    let (dir, backend) = setup();
    let path = dir.path().join("library_books.json");

    let mut store = BookStore::new(backend);
    store.save_all(&sample()).unwrap();
    let added = Book::new("Dune", "Frank Herbert", 1965).unwrap();
    store.add(added.clone()).unwrap();
    assert!(store.update_status(&BookId::from("2"), Status::Available).unwrap());
    assert!(store.delete(&BookId::from("1")).unwrap());

    let reopened = BookStore::new(FsBackend::new(&path));
    let books = reopened.load_all();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id().as_str(), "2");
    assert_eq!(books[0].status(), Status::Available);
    assert_eq!(books[1], added);
}

//! End-to-end flow tests for the in-memory shelf, driven through the
//! `BookStore` trait the way the CLI uses it.

use uuid::Uuid;

use bookshelf_core::{Book, BookStore, Genre, SearchQuery, Shelf, ShelfError};

fn seed_shelf() -> Shelf {
    let mut shelf = Shelf::new();
    shelf
        .add(
            Book::new(Uuid::new_v4(), "The Hobbit", "J.R.R. Tolkien")
                .with_year(1937)
                .with_genres(vec![Genre::Fantasy])
                .with_tags(vec!["classic".to_string(), "middle-earth".to_string()]),
        )
        .expect("add The Hobbit");
    shelf
        .add(
            Book::new(Uuid::new_v4(), "Hobbiton Tales", "J.R.R. Tolkien")
                .with_year(1950)
                .with_genres(vec![Genre::Fantasy, Genre::Fiction])
                .with_tags(vec!["middle-earth".to_string()]),
        )
        .expect("add Hobbiton Tales");
    shelf
        .add(
            Book::new(Uuid::new_v4(), "A Brief History of Time", "Stephen Hawking")
                .with_year(1988)
                .with_genres(vec![Genre::NonFiction])
                .with_tags(vec!["physics".to_string()]),
        )
        .expect("add A Brief History of Time");
    shelf
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|book| book.title.as_str()).collect()
}

#[test]
fn add_list_search_delete_flow() {
    let store: &mut dyn BookStore = &mut seed_shelf();

    let all = store.list();
    assert_eq!(
        titles(&all),
        vec!["The Hobbit", "Hobbiton Tales", "A Brief History of Time"]
    );

    let by_title = store
        .search(&SearchQuery::Title("hobbit".to_string()))
        .expect("title search");
    assert_eq!(titles(&by_title), vec!["The Hobbit", "Hobbiton Tales"]);

    let by_author = store
        .search(&SearchQuery::Author("tolkien".to_string()))
        .expect("author search");
    assert_eq!(by_author.len(), 2);

    let by_genre = store
        .search(&SearchQuery::Genre(Genre::NonFiction))
        .expect("genre search");
    assert_eq!(titles(&by_genre), vec!["A Brief History of Time"]);

    let by_tag = store
        .search(&SearchQuery::Tag("middle-earth".to_string()))
        .expect("tag search");
    assert_eq!(titles(&by_tag), vec!["The Hobbit", "Hobbiton Tales"]);

    let by_year = store
        .search(&SearchQuery::Year(1988))
        .expect("year search");
    assert_eq!(titles(&by_year), vec!["A Brief History of Time"]);

    let doomed = all[0].id;
    store.delete(&doomed).expect("delete The Hobbit");
    assert_eq!(
        titles(&store.list()),
        vec!["Hobbiton Tales", "A Brief History of Time"]
    );
    assert_eq!(store.delete(&doomed), Err(ShelfError::NotFound(doomed)));
}

#[test]
fn rejected_add_does_not_disturb_existing_records() {
    let mut shelf = seed_shelf();
    let before = shelf.list();

    let result = shelf.add(Book::new(Uuid::new_v4(), "   ", "Anonymous").with_year(2000));
    assert_eq!(result, Err(ShelfError::EmptyTitle));
    assert_eq!(shelf.list(), before);

    let result = shelf.add(Book::new(Uuid::new_v4(), "No Year", "Anonymous"));
    assert_eq!(result, Err(ShelfError::InvalidYear(0)));
    assert_eq!(shelf.list(), before);
}

#[test]
fn delete_and_re_add_with_fresh_id() {
    // No update operation exists; the documented flow is delete then re-add.
    let mut shelf = seed_shelf();
    let old = shelf.list()[0].clone();

    shelf.delete(&old.id).expect("delete");
    let revised = Book::new(Uuid::new_v4(), old.title.clone(), old.author.clone())
        .with_year(1937)
        .with_genres(old.genres.clone())
        .with_tags(old.tags.clone());
    shelf.add(revised).expect("re-add");

    // Re-added record lands at the end of the collection
    let all = shelf.list();
    assert_eq!(all.last().map(|book| book.title.as_str()), Some("The Hobbit"));
}

// Unit tests for cursor module
// Target resolution and construction from a page's info block

use crate::cursor::{PageCursor, PageDirection};

use models::api::ApiPageInfo;

use url::Url;

fn base() -> Url {
    Url::parse("https://rickandmortyapi.com/api/character/").unwrap()
}

fn page(n: u32) -> Url {
    Url::parse(&format!("https://rickandmortyapi.com/api/character/?page={n}")).unwrap()
}

/// **VALUE**: Verifies that each direction resolves to its own cursor when present.
///
/// **BUG THIS CATCHES**: Would catch swapped next/previous lookups.
#[test]
fn given_both_links_when_resolving_target_then_uses_matching_link() {
    // GIVEN: A cursor in the middle of the listing
    let cursor = PageCursor::with_links(base(), Some(page(3)), Some(page(1)));

    // WHEN/THEN: Each direction picks its link
    assert_eq!(cursor.target(PageDirection::Forward), &page(3));
    assert_eq!(cursor.target(PageDirection::Backward), &page(1));
}

/// **VALUE**: Verifies the fallback to the base listing URL.
///
/// **WHY THIS MATTERS**: On start there are no cursors yet; the first fetch must hit the base
/// URL. On the first page, "previous" must also fall back rather than fail.
#[test]
fn given_missing_links_when_resolving_target_then_falls_back_to_base() {
    // GIVEN: A fresh cursor and a first-page cursor
    let fresh = PageCursor::new(base());
    let first_page = PageCursor::with_links(base(), Some(page(2)), None);

    // WHEN/THEN: Absent links resolve to the base URL
    assert_eq!(fresh.target(PageDirection::Forward), &base());
    assert_eq!(fresh.target(PageDirection::Backward), &base());
    assert_eq!(first_page.target(PageDirection::Backward), &base());
}

#[test]
fn given_page_info_when_building_cursor_then_links_are_parsed() {
    // GIVEN: Info with an absolute next link and a relative previous link
    let info = ApiPageInfo {
        next: Some(String::from("https://rickandmortyapi.com/api/character/?page=3")),
        prev: Some(String::from("?page=1")),
    };

    // WHEN: Building the cursor
    let cursor = PageCursor::from_page_info(&base(), &info).unwrap();

    // THEN: Both links are absolute and the base is kept
    assert_eq!(cursor.next(), Some(&page(3)));
    assert_eq!(cursor.previous(), Some(&page(1)));
    assert_eq!(cursor.base(), &base());
    assert!(cursor.has_next());
    assert!(cursor.has_previous());
}

#[test]
fn given_null_links_when_building_cursor_then_has_no_neighbours() {
    let cursor = PageCursor::from_page_info(&base(), &ApiPageInfo::default()).unwrap();

    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
}

#[test]
fn given_bool_when_converted_then_true_means_forward() {
    assert_eq!(PageDirection::from(true), PageDirection::Forward);
    assert_eq!(PageDirection::from(false), PageDirection::Backward);
}

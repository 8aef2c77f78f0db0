// Unit tests for view module
// Renders literal state values and inspects the produced markup

use crate::cursor::PageCursor;
use crate::view::{
    FETCH_ERROR_MESSAGE, PillStyle, render_detail, render_error, render_list, render_loading,
    status_pill_style,
};

use models::{Character, CharacterBuilder, Episode, Episodes, Status};

use url::Url;

fn base() -> Url {
    Url::parse("https://rickandmortyapi.com/api/character/").unwrap()
}

fn character(id: u32, name: &str, status: Status) -> Character {
    CharacterBuilder::default()
        .with_id(id)
        .with_name(name)
        .with_image(format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"))
        .with_species("Human")
        .with_status(status)
        .with_gender("Male")
        .with_origin("Earth (C-137)")
        .with_location("Citadel of Ricks")
        .build()
        .unwrap()
}

fn episode(id: u32, name: &str, code: &str) -> Episode {
    Episode {
        id,
        name: name.to_string(),
        air_date: String::from("December 2, 2013"),
        code: code.to_string(),
    }
}

// ============================================
// STATUS PILL
// ============================================

/// **VALUE**: Verifies the exact status → pill style mapping.
///
/// **BUG THIS CATCHES**: Would catch case-insensitive matching ("alive" must be a warning)
/// or a missing fallback for values the API may add later.
#[test]
fn given_status_strings_when_mapping_pill_style_then_matches_exactly() {
    assert_eq!(status_pill_style("Alive"), PillStyle::Success);
    assert_eq!(status_pill_style("Dead"), PillStyle::Danger);
    assert_eq!(status_pill_style("unknown"), PillStyle::Warning);
    assert_eq!(status_pill_style("alive"), PillStyle::Warning);
    assert_eq!(status_pill_style("Zombie"), PillStyle::Warning);

    assert_eq!(PillStyle::Success.css_class(), "text-bg-success");
    assert_eq!(PillStyle::Danger.css_class(), "text-bg-danger");
    assert_eq!(PillStyle::Warning.css_class(), "text-bg-warning");
}

// ============================================
// LIST VIEW
// ============================================

/// **VALUE**: Renders the first-page scenario: one row, forward enabled, backward disabled.
///
/// **WHY THIS MATTERS**: The pagination buttons are the only way to move through the catalog.
/// An enabled button without a cursor would silently reload the first page.
#[test]
fn given_first_page_when_rendering_list_then_only_forward_is_enabled() {
    // GIVEN: One character and a cursor with only a next link
    let characters = vec![character(1, "Rick", Status::Alive)];
    let cursor = PageCursor::with_links(base(), Some(base().join("?page=2").unwrap()), None);

    // WHEN: Rendering the list
    let markup = render_list(&characters, &cursor).unwrap();
    let html = markup.as_str();

    // THEN: Exactly one row, selectable by id, with a success pill
    assert_eq!(html.matches("<tr data-character-id=").count(), 1);
    assert!(html.contains(r#"data-action="select" data-id="1">Rick</span>"#));
    assert!(html.contains("text-bg-success"));

    // AND: Backward disabled, forward enabled
    assert!(html.contains(r#"data-action="previous" disabled>"#));
    assert!(html.contains(r#"data-action="next">"#));
    assert!(!html.contains(r#"data-action="next" disabled"#));
}

#[test]
fn given_last_page_when_rendering_list_then_only_backward_is_enabled() {
    // GIVEN: A cursor with only a previous link
    let characters = vec![character(826, "Butter Robot", Status::Unknown)];
    let cursor = PageCursor::with_links(base(), None, Some(base().join("?page=41").unwrap()));

    // WHEN: Rendering
    let html = render_list(&characters, &cursor).unwrap().into_string();

    // THEN: Buttons mirror the cursor
    assert!(html.contains(r#"data-action="previous">"#));
    assert!(html.contains(r#"data-action="next" disabled>"#));
    assert!(html.contains("text-bg-warning"));
    assert!(html.contains(">unknown</span>"));
}

/// **VALUE**: Verifies rows keep the order of the character list and each status gets its pill.
#[test]
fn given_several_characters_when_rendering_list_then_rows_follow_input_order() {
    // GIVEN: Three characters with different statuses
    let characters = vec![
        character(1, "Rick", Status::Alive),
        character(8, "Adjudicator Rick", Status::Dead),
        character(3, "Summer", Status::Alive),
    ];

    // WHEN: Rendering with no cursors
    let html = render_list(&characters, &PageCursor::new(base()))
        .unwrap()
        .into_string();

    // THEN: Three rows in input order
    let first = html.find(r#"data-id="1""#).unwrap();
    let second = html.find(r#"data-id="8""#).unwrap();
    let third = html.find(r#"data-id="3""#).unwrap();
    assert!(first < second && second < third);
    assert_eq!(html.matches("text-bg-danger").count(), 1);

    // AND: Both buttons disabled
    assert!(html.contains(r#"data-action="previous" disabled>"#));
    assert!(html.contains(r#"data-action="next" disabled>"#));
}

/// **VALUE**: Verifies that API-provided text is HTML-escaped.
///
/// **BUG THIS CATCHES**: Would catch a template switched to raw output, which would let a
/// catalog entry inject markup into the page.
#[test]
fn given_markup_in_name_when_rendering_list_then_it_is_escaped() {
    let characters = vec![character(5, "<Rick & Morty>", Status::Alive)];

    let html = render_list(&characters, &PageCursor::new(base()))
        .unwrap()
        .into_string();

    assert!(html.contains("&lt;Rick &amp; Morty&gt;"));
    assert!(!html.contains("<Rick & Morty>"));
}

#[test]
fn given_same_state_when_rendering_twice_then_markup_is_identical() {
    let characters = vec![character(1, "Rick", Status::Alive)];
    let cursor = PageCursor::new(base());

    assert_eq!(
        render_list(&characters, &cursor).unwrap(),
        render_list(&characters, &cursor).unwrap()
    );
}

// ============================================
// DETAIL VIEW
// ============================================

/// **VALUE**: Verifies the Type field only appears for characters that have one.
#[test]
fn given_character_type_when_rendering_detail_then_type_field_is_conditional() {
    // GIVEN: One character without and one with a type
    let plain = character(1, "Rick", Status::Alive);
    let mut typed = character(7, "Abradolf Lincler", Status::Unknown);
    typed.kind = String::from("Genetic experiment");

    // WHEN: Rendering both
    let plain_html = render_detail(&plain).unwrap().into_string();
    let typed_html = render_detail(&typed).unwrap().into_string();

    // THEN: Only the typed one shows the field
    assert!(!plain_html.contains("<b>Type:</b>"));
    assert!(typed_html.contains("<b>Type:</b> Genetic experiment"));
}

/// **VALUE**: Verifies the episode section is omitted until episodes are resolved.
///
/// **WHY THIS MATTERS**: Unresolved and "resolved to an empty list" are different states;
/// only the latter should show the (empty) Episodes section.
#[test]
fn given_unresolved_episodes_when_rendering_detail_then_section_is_omitted() {
    let rick = character(1, "Rick", Status::Alive);
    assert_eq!(rick.episodes, Episodes::Unresolved);

    let html = render_detail(&rick).unwrap().into_string();

    assert!(!html.contains("<h2 class=\"text-center m-3\">Episodes</h2>"));
    assert!(html.contains(r#"data-action="back""#));
    assert!(html.contains("<b>Origin:</b> Earth (C-137)"));
    assert!(html.contains("<b>Location:</b> Citadel of Ricks"));
}

#[test]
fn given_resolved_episodes_when_rendering_detail_then_cards_follow_resolved_order() {
    // GIVEN: A character with two resolved episodes
    let mut rick = character(1, "Rick", Status::Alive);
    rick.episodes = Episodes::Resolved(vec![
        episode(1, "Pilot", "S01E01"),
        episode(2, "Lawnmower Dog", "S01E02"),
    ]);

    // WHEN: Rendering
    let html = render_detail(&rick).unwrap().into_string();

    // THEN: The section holds exactly two cards in order
    assert!(html.contains("<h2 class=\"text-center m-3\">Episodes</h2>"));
    assert_eq!(html.matches(r#"class="card h-100""#).count(), 2);
    let pilot = html.find(r#"data-episode-code="S01E01""#).unwrap();
    let lawnmower = html.find(r#"data-episode-code="S01E02""#).unwrap();
    assert!(pilot < lawnmower);
    assert!(html.contains("<h5 class=\"card-title\">Lawnmower Dog</h5>"));
}

#[test]
fn given_resolved_empty_episodes_when_rendering_detail_then_section_has_no_cards() {
    let mut rick = character(1, "Rick", Status::Alive);
    rick.episodes = Episodes::Resolved(Vec::new());

    let html = render_detail(&rick).unwrap().into_string();

    assert!(html.contains("<h2 class=\"text-center m-3\">Episodes</h2>"));
    assert_eq!(html.matches(r#"class="card h-100""#).count(), 0);
}

// ============================================
// STATUS VIEWS
// ============================================

/// **VALUE**: Verifies the loading view has no controls.
///
/// **WHY THIS MATTERS**: While a fetch is in flight nothing may be clicked; the loading view
/// having no `data-action` element is what enforces that on screen.
#[test]
fn given_message_when_rendering_loading_then_shows_message_without_controls() {
    let html = render_loading("Loading characters...").unwrap().into_string();

    assert!(html.contains("<p>Loading characters...</p>"));
    assert!(html.contains("spinner-border"));
    assert!(!html.contains("data-action"));
}

#[test]
fn given_error_when_rendering_then_shows_generic_message_and_dismiss() {
    let html = render_error().unwrap().into_string();

    assert!(html.contains("<strong>Error!</strong>"));
    assert!(html.contains(FETCH_ERROR_MESSAGE));
    assert!(html.contains(r#"data-action="dismiss""#));
}

// ============================================
// CONTROLS
// ============================================

/// **VALUE**: Verifies every navigation control is findable without its icon.
///
/// **WHY THIS MATTERS**: The arrow glyphs come from an icon font loaded by the page. If it
/// fails to load, the outline and label still identify the pagination and back controls.
///
/// **BUG THIS CATCHES**: Would catch icon-only buttons with a transparent border, which
/// render as empty space.
#[test]
fn given_list_and_detail_when_rendering_then_controls_are_outlined_and_labelled() {
    // GIVEN: A list page and a detail view
    let characters = vec![character(1, "Rick", Status::Alive)];
    let list = render_list(&characters, &PageCursor::new(base()))
        .unwrap()
        .into_string();
    let detail = render_detail(&characters[0]).unwrap().into_string();

    // THEN: Pagination buttons carry an outline and an accessible label
    assert!(list.contains(r#"btn-outline-primary page-button" aria-label="Previous page""#));
    assert!(list.contains(r#"btn-outline-primary page-button" aria-label="Next page""#));

    // AND: So does the back control
    assert!(detail.contains(
        r#"btn-outline-primary btn-circle" data-action="back" aria-label="Back to list""#
    ));

    // AND: List thumbnails carry the class the page sizes
    assert!(list.contains("character-image"));
}

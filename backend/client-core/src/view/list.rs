use crate::cursor::PageCursor;
use crate::view::pill::PillStyle;

use models::{Character, CharacterId};

use askama::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
    pub species: String,
    pub status: &'static str,
    pub pill_class: &'static str,
}

impl From<&Character> for CharacterRow {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            image: character.image.clone(),
            species: character.species.clone(),
            status: character.status.label(),
            pill_class: PillStyle::from(character.status).css_class(),
        }
    }
}

/// Character table plus pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(
    source = r#"<div class="table-responsive">
    <table class="table table-striped text-center align-middle">
        <thead>
            <tr>
                <th>Image</th>
                <th>Name</th>
                <th>Species</th>
                <th>Status</th>
            </tr>
        </thead>
        <tbody>
{% for row in rows %}
            <tr data-character-id="{{ row.id }}">
                <td>
                    <img class="img-fluid rounded-circle character-image" src="{{ row.image }}" alt="{{ row.name }}">
                </td>
                <td>
                    <span class="custom-link" data-action="select" data-id="{{ row.id }}">{{ row.name }}</span>
                </td>
                <td>{{ row.species }}</td>
                <td>
                    <span class="rounded-pill {{ row.pill_class }} px-3 py-2">{{ row.status }}</span>
                </td>
            </tr>
{% endfor %}
        </tbody>
    </table>
</div>
<div class="row mb-3">
    <div class="col text-center">
        <div class="btn-group" role="group" aria-label="Pagination buttons">
            <button type="button" class="btn btn-outline-primary page-button" aria-label="Previous page" data-action="previous"{% if !can_go_back %} disabled{% endif %}>
                <i class="fas fa-arrow-left"></i>
            </button>
            <button type="button" class="btn btn-outline-primary page-button" aria-label="Next page" data-action="next"{% if !can_go_forward %} disabled{% endif %}>
                <i class="fas fa-arrow-right"></i>
            </button>
        </div>
    </div>
</div>
"#,
    ext = "html"
)]
pub struct ListView {
    pub rows: Vec<CharacterRow>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl ListView {
    pub fn new(characters: &[Character], cursor: &PageCursor) -> Self {
        Self {
            rows: characters.iter().map(CharacterRow::from).collect(),
            can_go_back: cursor.has_previous(),
            can_go_forward: cursor.has_next(),
        }
    }
}

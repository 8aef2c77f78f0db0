use crate::view::pill::PillStyle;

use models::{Character, CharacterId, Episode};

use askama::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeCard {
    pub name: String,
    pub air_date: String,
    pub code: String,
}

impl From<&Episode> for EpisodeCard {
    fn from(episode: &Episode) -> Self {
        Self {
            name: episode.name.clone(),
            air_date: episode.air_date.clone(),
            code: episode.code.clone(),
        }
    }
}

/// One character with its resolved episodes.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(
    source = r#"<div class="col" data-character-id="{{ id }}">
    <div class="row">
        <button type="button" class="btn btn-outline-primary btn-circle" data-action="back" aria-label="Back to list">
            <i class="fas fa-arrow-left"></i>
        </button>
    </div>
    <div class="row align-items-center">
        <div class="col-sm-12 col-md-6 text-center">
            <img class="img-fluid rounded-circle" src="{{ image }}" alt="{{ name }}">
        </div>
        <div class="col-sm-12 col-md-6">
            <div class="row justify-content-center">
                <div class="col-12">
                    <h1>{{ name }}</h1>
                </div>
                <div class="col-12 col-sm-6 col-md-12">
                    <p><b>Species:</b> {{ species }}</p>
                </div>
                <div class="col-12 col-sm-6 col-md-12">
                    <p>
                        <b>Status:</b>
                        <span class="rounded-pill {{ pill_class }} px-3 py-2">{{ status }}</span>
                    </p>
                </div>
{% if has_kind %}
                <div class="col-12 col-sm-6 col-md-12">
                    <p><b>Type:</b> {{ kind }}</p>
                </div>
{% endif %}
                <div class="col-12 col-sm-6 col-md-12">
                    <p><b>Gender:</b> {{ gender }}</p>
                </div>
                <div class="col-12 col-sm-6 col-md-12">
                    <p><b>Origin:</b> {{ origin }}</p>
                </div>
                <div class="col-12 col-sm-6 col-md-12">
                    <p><b>Location:</b> {{ location }}</p>
                </div>
            </div>
        </div>
    </div>
{% if episodes_resolved %}
    <div class="row justify-content-center episodes">
        <h2 class="text-center m-3">Episodes</h2>
{% for episode in episodes %}
        <div class="col-sm-12 col-md-6 col-lg-3 mb-3">
            <div class="card h-100" data-episode-code="{{ episode.code }}">
                <div class="card-body">
                    <h5 class="card-title">{{ episode.name }}</h5>
                    <h6 class="card-subtitle mb-2 text-muted">{{ episode.air_date }}</h6>
                    <p class="card-text">{{ episode.code }}</p>
                </div>
            </div>
        </div>
{% endfor %}
    </div>
{% endif %}
</div>
"#,
    ext = "html"
)]
pub struct DetailView {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
    pub species: String,
    pub status: &'static str,
    pub pill_class: &'static str,
    pub has_kind: bool,
    pub kind: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub episodes_resolved: bool,
    pub episodes: Vec<EpisodeCard>,
}

impl From<&Character> for DetailView {
    fn from(character: &Character) -> Self {
        let resolved = character.episodes.resolved();

        Self {
            id: character.id,
            name: character.name.clone(),
            image: character.image.clone(),
            species: character.species.clone(),
            status: character.status.label(),
            pill_class: PillStyle::from(character.status).css_class(),
            has_kind: !character.kind.trim().is_empty(),
            kind: character.kind.clone(),
            gender: character.gender.clone(),
            origin: character.origin.clone(),
            location: character.location.clone(),
            episodes_resolved: resolved.is_some(),
            episodes: resolved
                .unwrap_or_default()
                .iter()
                .map(EpisodeCard::from)
                .collect(),
        }
    }
}

use askama::Template;

// Every interpolation goes through askama's HTML escaper.

pub(crate) struct SuggestionRow<'a> {
    pub label: &'a str,
    pub key: String,
    pub known_for: Option<String>,
}

#[derive(Template)]
#[template(
    source = r#"{% for row in rows %}<div class="suggestion-item" data-index="{{ loop.index0 }}" data-{{ key_attr }}="{{ row.key }}">{{ row.label }}{% if let Some(known_for) = row.known_for %}<small>Known for: {{ known_for }}</small>{% endif %}</div>
{% endfor %}"#,
    ext = "html"
)]
pub(crate) struct SuggestionsTemplate<'a> {
    pub key_attr: &'a str,
    pub rows: Vec<SuggestionRow<'a>>,
}

#[derive(Template)]
#[template(
    source = r#"<div class="movie-header">
    <img src="{{ poster }}" alt="{{ title }}" class="movie-poster">
    <div class="movie-info">
        <h1 class="movie-title">{{ title }}</h1>
        <div class="movie-meta">
            <p>Release Date: {{ release_date }}</p>
            <p>Runtime: {{ runtime }} minutes</p>
            <p>Genres: {{ genres }}</p>
            <p class="rating">Rating: {{ rating }}/10</p>
        </div>
        <h3>Overview</h3>
        <p>{{ overview }}</p>
        <h3>Director</h3>
        <p>{{ director }}</p>
        <h3>Cast</h3>
        <p>{{ cast }}</p>
        <div class="movie-stats">
            <p>Budget: ${{ budget }}M</p>
            <p>Revenue: ${{ revenue }}M</p>
        </div>
    </div>
</div>"#,
    ext = "html"
)]
pub(crate) struct MovieDetailTemplate<'a> {
    pub poster: &'a str,
    pub title: &'a str,
    pub release_date: &'a str,
    pub runtime: String,
    pub genres: String,
    pub rating: String,
    pub overview: &'a str,
    pub director: &'a str,
    pub cast: String,
    pub budget: String,
    pub revenue: String,
}

pub(crate) struct Card<'a> {
    pub image: &'a str,
    pub title: &'a str,
    pub year: String,
}

#[derive(Template)]
#[template(
    source = r#"<h2>Movie Recommendations</h2>
<div class="recommendations-container">
{% for card in cards %}    <div class="recommendation-card">
        <img src="{{ card.image }}" alt="{{ card.title }}" class="movie-poster">
        <h3>{{ card.title }} ({{ card.year }})</h3>
    </div>
{% endfor %}</div>"#,
    ext = "html"
)]
pub(crate) struct RecommendationsTemplate<'a> {
    pub cards: Vec<Card<'a>>,
}

#[derive(Template)]
#[template(
    source = r#"<div class="actor-header">
    <img src="{{ profile }}" alt="{{ name }}" class="actor-poster">
    <div class="actor-info">
        <h1 class="actor-title">{{ name }}</h1>
        <div class="actor-meta">
            <p>Birthday: {{ birthday }}</p>
            <p>Place of Birth: {{ place_of_birth }}</p>
            <p>Known For: {{ department }}</p>
            <p>Popularity: {{ popularity }}</p>
        </div>
{% if !also_known_as.is_empty() %}        <h3>Also Known As</h3><p>{{ also_known_as }}</p>
{% endif %}    </div>
</div>"#,
    ext = "html"
)]
pub(crate) struct ActorDetailTemplate<'a> {
    pub profile: &'a str,
    pub name: &'a str,
    pub birthday: &'a str,
    pub place_of_birth: &'a str,
    pub department: &'a str,
    pub popularity: String,
    pub also_known_as: String,
}

#[derive(Template)]
#[template(
    source = r#"{% for card in cards %}<div class="recommendation-card">
    <img src="{{ card.image }}" alt="{{ card.title }}" class="movie-poster">
    <h3>{{ card.title }} ({{ card.year }})</h3>
</div>
{% endfor %}"#,
    ext = "html"
)]
pub(crate) struct FilmographyTemplate<'a> {
    pub cards: Vec<Card<'a>>,
}

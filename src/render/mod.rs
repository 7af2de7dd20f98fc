//! HTML for every page region.

mod templates;

use askama::Template;

use crate::api::{ActorDetail, ActorMovie, ActorSuggestion, MovieDetail, MovieSuggestion, Recommendation};
use crate::image;
use templates::*;

pub const NO_RESULTS: &str = "<div class='suggestion-item'>No results found</div>";
pub const NO_RECOMMENDATIONS: &str = "<p>No recommendations available.</p>";
pub const RECOMMENDATIONS_ERROR: &str = "<p>Error loading recommendations.</p>";

const UNKNOWN: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
#[error("Template error: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Placeholder entry shown in the dropdown when a suggestion fetch fails.
pub fn search_error(noun: &str) -> String {
    format!("<div class='suggestion-item'>Error searching for {}</div>", noun)
}

/// Whole currency units as millions, two decimals. Ties round away from zero.
pub fn millions(value: f64) -> String {
    format!("{:.2}", (value / 10_000.0).round() / 100.0)
}

/// Year from the leading segment of `release_date`, else `year`, else "Unknown".
pub fn release_year(release_date: Option<&str>, year: Option<&str>) -> String {
    let from_date = release_date
        .filter(|d| !d.is_empty())
        .and_then(|d| d.split('-').next());
    from_date
        .or(year.filter(|y| !y.is_empty()))
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn text(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(UNKNOWN)
}

fn number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn movie_suggestions(suggestions: &[MovieSuggestion]) -> Result<String, RenderError> {
    let labels: Vec<String> = suggestions.iter().map(|s| s.label()).collect();
    let rows = suggestions
        .iter()
        .zip(&labels)
        .map(|(s, label)| SuggestionRow {
            label,
            key: s.id.to_string(),
            known_for: None,
        })
        .collect();
    Ok(SuggestionsTemplate {
        key_attr: "movie-id",
        rows,
    }
    .render()?)
}

pub fn actor_suggestions(suggestions: &[ActorSuggestion]) -> Result<String, RenderError> {
    let rows = suggestions
        .iter()
        .map(|s| SuggestionRow {
            label: &s.name,
            key: s.name.clone(),
            known_for: (!s.known_for.is_empty()).then(|| s.known_for.join(", ")),
        })
        .collect();
    Ok(SuggestionsTemplate {
        key_attr: "actor-name",
        rows,
    }
    .render()?)
}

pub fn movie_detail(movie: &MovieDetail, fallback_image: &str) -> Result<String, RenderError> {
    let template = MovieDetailTemplate {
        poster: image::resolve(movie.poster_path.as_deref(), fallback_image),
        title: &movie.title,
        release_date: text(movie.release_date.as_deref()),
        runtime: number(movie.runtime),
        genres: movie.genres.join(", "),
        rating: number(movie.vote_average),
        overview: text(movie.overview.as_deref()),
        director: text(movie.director.as_deref()),
        cast: movie.cast.join(", "),
        budget: millions(movie.budget),
        revenue: millions(movie.revenue),
    };
    Ok(template.render()?)
}

pub fn recommendations(recs: &[Recommendation], fallback_image: &str) -> Result<String, RenderError> {
    let cards = recs
        .iter()
        .map(|rec| Card {
            image: image::resolve(rec.poster_path.as_deref(), fallback_image),
            title: &rec.title,
            year: release_year(rec.release_date.as_deref(), rec.year.as_deref()),
        })
        .collect();
    Ok(RecommendationsTemplate { cards }.render()?)
}

pub fn actor_detail(actor: &ActorDetail, fallback_image: &str) -> Result<String, RenderError> {
    let template = ActorDetailTemplate {
        profile: image::resolve(actor.profile_path.as_deref(), fallback_image),
        name: &actor.name,
        birthday: text(actor.birthday.as_deref()),
        place_of_birth: text(actor.place_of_birth.as_deref()),
        department: text(actor.known_for_department.as_deref()),
        popularity: number(actor.popularity),
        also_known_as: actor.also_known_as.join(", "),
    };
    Ok(template.render()?)
}

pub fn filmography(movies: &[ActorMovie], fallback_image: &str) -> Result<String, RenderError> {
    let cards = movies
        .iter()
        .map(|movie| Card {
            image: image::resolve(movie.poster_path.as_deref(), fallback_image),
            title: &movie.title,
            year: release_year(movie.release_date.as_deref(), None),
        })
        .collect();
    Ok(FilmographyTemplate { cards }.render()?)
}

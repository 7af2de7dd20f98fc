use serde::{Deserialize, Deserializer, Serialize};

// Wire types for the movie-discovery backend.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSuggestions {
    pub suggestions: Vec<MovieSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSuggestion {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub year: Option<String>,
}

impl MovieSuggestion {
    /// "Title (Year)", as shown in the dropdown and written back to the search box.
    pub fn label(&self) -> String {
        let year = self
            .year
            .as_deref()
            .filter(|y| !y.trim().is_empty())
            .unwrap_or("Unknown");
        format!("{} ({})", self.title, year)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetailsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub movie: Option<MovieDetail>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MovieDetailsResponse {
    /// The movie, if the backend reported success and sent one.
    pub fn into_movie(self) -> Option<MovieDetail> {
        if self.success {
            self.movie
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    #[serde(default, deserialize_with = "crate::image::deserialize")]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    #[serde(default, deserialize_with = "crate::image::deserialize")]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSuggestionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub suggestions: Option<Vec<ActorSuggestion>>,
}

impl ActorSuggestionsResponse {
    /// `None` when the backend had nothing to offer.
    pub fn into_suggestions(self) -> Option<Vec<ActorSuggestion>> {
        if self.success {
            self.suggestions
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSuggestion {
    pub name: String,
    #[serde(default, deserialize_with = "known_for_titles")]
    pub known_for: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorDetailsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub actor: Option<ActorDetail>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActorDetailsResponse {
    pub fn into_actor(self) -> Option<ActorDetail> {
        if self.success {
            self.actor
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDetail {
    pub name: String,
    #[serde(default, deserialize_with = "crate::image::deserialize")]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    #[serde(default)]
    pub movies: Vec<ActorMovie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorMovie {
    pub title: String,
    #[serde(default, deserialize_with = "crate::image::deserialize")]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

// Years come back as "2010" from some endpoints and 2010 from others.
fn flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) => Some(s),
        Some(StringOrNumber::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KnownFor {
    Title(String),
    Movie { title: String },
}

fn known_for_titles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<KnownFor>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            KnownFor::Title(title) | KnownFor::Movie { title } => title,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_suggestion_year_as_number_or_string() {
        let json = r#"{"suggestions": [
            {"id": 27205, "title": "Inception", "year": 2010},
            {"id": 64956, "title": "Inception: The Cobol Job", "year": "2010"},
            {"id": 1, "title": "Untitled", "year": ""}
        ]}"#;
        let resp: MovieSuggestions = serde_json::from_str(json).unwrap();
        assert_eq!(resp.suggestions[0].label(), "Inception (2010)");
        assert_eq!(resp.suggestions[1].year.as_deref(), Some("2010"));
        assert_eq!(resp.suggestions[2].label(), "Untitled (Unknown)");
    }

    #[test]
    fn test_missing_suggestions_is_a_decode_error() {
        assert!(serde_json::from_str::<MovieSuggestions>("{}").is_err());
    }

    #[test]
    fn test_movie_details_unsuccessful() {
        let json = r#"{"success": false, "message": "Movie not found"}"#;
        let resp: MovieDetailsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Movie not found"));
        assert!(resp.into_movie().is_none());
    }

    #[test]
    fn test_movie_details_decode() {
        let json = r#"{"success": true, "movie": {
            "title": "Inception",
            "poster_path": "https://image.tmdb.org/t/p/w500None",
            "release_date": "2010-07-15",
            "runtime": 148,
            "genres": ["Action", "Science Fiction"],
            "vote_average": 8.4,
            "overview": "A thief who steals corporate secrets.",
            "director": "Christopher Nolan",
            "cast": ["Leonardo DiCaprio", "Joseph Gordon-Levitt"],
            "budget": 160000000,
            "revenue": 825532764
        }}"#;
        let resp: MovieDetailsResponse = serde_json::from_str(json).unwrap();
        let movie = resp.into_movie().unwrap();
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.runtime, Some(148));
        assert_eq!(movie.budget, 160_000_000.0);
        assert_eq!(movie.cast.len(), 2);
    }

    #[test]
    fn test_recommendation_year_variants() {
        let json = r#"{"success": true, "recommendations": [
            {"title": "A", "poster_path": null, "year": 1999},
            {"title": "B", "poster_path": "null", "year": "Unknown Year"},
            {"title": "C", "release_date": "2005-07-15"}
        ]}"#;
        let resp: RecommendationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.recommendations[0].year.as_deref(), Some("1999"));
        assert_eq!(resp.recommendations[1].poster_path, None);
        assert_eq!(resp.recommendations[2].release_date.as_deref(), Some("2005-07-15"));
    }

    #[test]
    fn test_actor_known_for_shapes() {
        let json = r#"{"success": true, "suggestions": [
            {"name": "Tom Hanks", "id": null, "known_for": ["Big", {"title": "Cast Away", "id": 8358}]},
            {"name": "Tom Holland"}
        ]}"#;
        let resp: ActorSuggestionsResponse = serde_json::from_str(json).unwrap();
        let suggestions = resp.into_suggestions().unwrap();
        assert_eq!(suggestions[0].known_for, vec!["Big", "Cast Away"]);
        assert!(suggestions[1].known_for.is_empty());
    }

    #[test]
    fn test_actor_suggestions_without_success_flag() {
        let resp: ActorSuggestionsResponse =
            serde_json::from_str(r#"{"suggestions": []}"#).unwrap();
        assert!(resp.into_suggestions().is_none());
    }
}

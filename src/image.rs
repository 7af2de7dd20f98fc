use serde::{Deserialize, Deserializer};

/// Shown wherever the backend has no usable poster or profile image.
pub const FALLBACK_IMAGE: &str = "https://png.pngtree.com/png-vector/20190820/ourmid/pngtree-no-image-vector-illustration-isolated-png-image_1694547.jpg";

/// The backend glues a missing TMDB path onto the CDN prefix, producing this.
pub const INVALID_CDN_URL: &str = "https://image.tmdb.org/t/p/w500None";

/// Returns true if `path` points at a real image.
pub fn usable(path: &str) -> bool {
    let path = path.trim();
    !path.is_empty() && path != "null" && path != INVALID_CDN_URL
}

/// Serde adapter for image fields: every "no image" marker becomes `None`.
///
/// Use with `#[serde(default, deserialize_with = "image::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let path = Option::<String>::deserialize(deserializer)?;
    Ok(path.filter(|p| usable(p)))
}

/// Picks the image source to render.
pub fn resolve<'a>(path: Option<&'a str>, fallback: &'a str) -> &'a str {
    match path {
        Some(p) if usable(p) => p,
        _ => fallback,
    }
}

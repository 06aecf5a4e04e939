use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::errors::ProductError;

/// Unique product identifier.
///
/// Freshly generated ids are UUIDv7 strings: time-ordered with a random tail,
/// so two products added in the same millisecond still get distinct ids.
/// Any string read back from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

static DATA_URI: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^data:(image/[A-Za-z0-9.+-]+);base64,([\s\S]+)$"));

/// A photographed product label, as a MIME type plus base64 payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    pub mime_type: String,
    pub data_base64: String,
}

impl LabelImage {
    /// Parses a `data:<mime>;base64,<payload>` URI.
    ///
    /// Whitespace inside the payload is dropped; the payload must decode as
    /// standard base64 and the MIME type must be an image type.
    pub fn from_data_uri(uri: &str) -> Result<Self, ProductError> {
        let re = (*DATA_URI).as_ref().map_err(|_| ProductError::InvalidImage)?;
        let caps = re.captures(uri.trim()).ok_or(ProductError::InvalidImage)?;

        let mime_type = caps[1].to_ascii_lowercase();
        let data_base64: String = caps[2].chars().filter(|c| !c.is_whitespace()).collect();

        STANDARD
            .decode(&data_base64)
            .map_err(|_| ProductError::InvalidImage)?;

        Ok(Self {
            mime_type,
            data_base64,
        })
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data_base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_distinct_product_ids() {
        let ids: Vec<ProductId> = (0..1000).map(|_| ProductId::generate()).collect();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn should_keep_legacy_ids_verbatim() {
        let id = ProductId::new("2024-06-10T08:15:30.123Z");
        assert_eq!(id.as_str(), "2024-06-10T08:15:30.123Z");
        assert_eq!(format!("{}", id), "2024-06-10T08:15:30.123Z");
    }

    #[test]
    fn should_parse_png_data_uri() {
        let image = LabelImage::from_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data_base64, "aGVsbG8=");
        assert_eq!(image.to_data_uri(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn should_strip_whitespace_from_payload() {
        let image = LabelImage::from_data_uri("data:image/jpeg;base64,aGVs\nbG8=").unwrap();
        assert_eq!(image.data_base64, "aGVsbG8=");
    }

    #[test]
    fn should_reject_uri_without_data_prefix() {
        let result = LabelImage::from_data_uri("aGVsbG8=");
        assert!(matches!(result, Err(ProductError::InvalidImage)));
    }

    #[test]
    fn should_reject_non_image_mime_type() {
        let result = LabelImage::from_data_uri("data:text/plain;base64,aGVsbG8=");
        assert!(matches!(result, Err(ProductError::InvalidImage)));
    }

    #[test]
    fn should_parse_several_uris_with_one_compiled_pattern() {
        for mime in ["image/png", "image/jpeg", "image/webp"] {
            let uri = format!("data:{};base64,aGVsbG8=", mime);
            let image = LabelImage::from_data_uri(&uri).unwrap();
            assert_eq!(image.mime_type, mime);
        }
        assert!(DATA_URI.is_ok());
    }

    #[test]
    fn should_reject_invalid_base64_payload() {
        let result = LabelImage::from_data_uri("data:image/png;base64,not*base64!");
        assert!(matches!(result, Err(ProductError::InvalidImage)));
    }
}

use crate::domain::model::Media;

/// Image attributes ready for markup. Missing media never fails a render:
/// an absent `url` becomes an empty `src` and an absent or blank
/// `alternativeText` falls back to the first non-blank candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaView {
    pub src: String,
    pub alt: String,
}

impl MediaView {
    pub fn resolve(media: Option<&Media>, fallbacks: &[Option<&str>]) -> Self {
        let src = media
            .and_then(|m| m.url.as_deref())
            .unwrap_or_default()
            .to_string();

        let alt = media
            .and_then(|m| m.alternative_text.as_deref())
            .into_iter()
            .chain(fallbacks.iter().copied().flatten())
            .find(|text| !text.trim().is_empty())
            .unwrap_or_default()
            .to_string();

        Self { src, alt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_media_alt() {
        let media = Media {
            url: Some("/uploads/hero.jpg".into()),
            alternative_text: Some("Cows at dawn".into()),
            ..Default::default()
        };
        let view = MediaView::resolve(Some(&media), &[Some("Welcome")]);
        assert_eq!(view.src, "/uploads/hero.jpg");
        assert_eq!(view.alt, "Cows at dawn");
    }

    #[test]
    fn test_resolve_falls_back_past_blank_values() {
        let media = Media {
            alternative_text: Some("".into()),
            ..Default::default()
        };
        let view = MediaView::resolve(Some(&media), &[None, Some(" "), Some("Welcome")]);
        assert_eq!(view.src, "");
        assert_eq!(view.alt, "Welcome");
    }

    #[test]
    fn test_resolve_without_media_or_fallback() {
        let view = MediaView::resolve(None, &[]);
        assert_eq!(
            view,
            MediaView {
                src: String::new(),
                alt: String::new()
            }
        );
    }
}

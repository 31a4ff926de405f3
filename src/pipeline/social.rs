use scraper::{Html, Selector};

const SOCIAL_IMAGE_EXTS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Metadata scraped from a social/news page: the `<title>` text, the
/// `description` meta content, and a representative image URL (`og:image`
/// preferred, else the first `<img src>`).
#[derive(Clone, Debug, Default)]
pub struct PagePreview {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl PagePreview {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let title_sel = Selector::parse("title").expect("title selector");
        let title = document
            .select(&title_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();

        let desc_sel =
            Selector::parse(r#"meta[name="description"]"#).expect("description selector");
        let description = document
            .select(&desc_sel)
            .next()
            .and_then(|el| el.value().attr("content"))
            .unwrap_or_default()
            .to_string();

        let og_sel = Selector::parse(r#"meta[property="og:image"]"#).expect("og:image selector");
        let img_sel = Selector::parse("img").expect("img selector");
        let image_url = document
            .select(&og_sel)
            .next()
            .and_then(|el| el.value().attr("content"))
            .or_else(|| {
                document
                    .select(&img_sel)
                    .next()
                    .and_then(|el| el.value().attr("src"))
            })
            .map(str::to_string);

        Self {
            title,
            description,
            image_url,
        }
    }

    /// Claim text sent onward: title, description, and the caller's hint,
    /// newline-joined even when parts are empty.
    pub fn effective_claim(&self, hint: &str) -> String {
        format!("{}\n{}\n{}", self.title, self.description, hint)
    }
}

/// MIME type for an uploaded image, derived naively from the filename
/// extension: lowercased, never normalized (`jpg` stays `jpg`) and never
/// checked against an allow-list. An unknown extension yields a string like
/// `image/txt`; an empty one yields `image/`.
pub fn upload_mime(extension: &str) -> String {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    format!("image/{ext}")
}

/// MIME type for an image referenced from a social page. The extension comes
/// from the URL with any query string stripped; anything missing or outside
/// the known set falls back to `jpeg`.
pub fn social_mime(image_url: &str) -> String {
    let path = image_url.split('?').next().unwrap_or(image_url);
    let ext = path
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    let ext = match ext {
        Some(ext) if SOCIAL_IMAGE_EXTS.contains(&ext.as_str()) => ext,
        _ => "jpeg".to_string(),
    };
    format!("image/{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_prefers_og_image_and_tolerates_missing_description() {
        let html = r#"<html><head><title>A</title>
            <meta property="og:image" content="https://x/img.png">
            </head><body><img src="https://x/other.gif"></body></html>"#;
        let preview = PagePreview::parse(html);
        assert_eq!(preview.title, "A");
        assert_eq!(preview.description, "");
        assert_eq!(preview.image_url.as_deref(), Some("https://x/img.png"));
        assert_eq!(preview.effective_claim("check"), "A\n\ncheck");
    }

    #[test]
    fn preview_falls_back_to_first_img_tag() {
        let html = r#"<html><head><title>B</title>
            <meta name="description" content="a summary">
            </head><body><img src="/lead.jpg"><img src="/second.jpg"></body></html>"#;
        let preview = PagePreview::parse(html);
        assert_eq!(preview.description, "a summary");
        assert_eq!(preview.image_url.as_deref(), Some("/lead.jpg"));
        assert_eq!(preview.effective_claim("hint"), "B\na summary\nhint");
    }

    #[test]
    fn preview_without_images_has_none() {
        let preview = PagePreview::parse("<html><head></head><body><p>text</p></body></html>");
        assert_eq!(preview.title, "");
        assert!(preview.image_url.is_none());
    }

    #[test]
    fn upload_mime_lowercases_but_never_normalizes() {
        assert_eq!(upload_mime("JPG"), "image/jpg");
        assert_eq!(upload_mime(".JPG"), "image/jpg");
        assert_eq!(upload_mime("png"), "image/png");
        assert_eq!(upload_mime("txt"), "image/txt");
        assert_eq!(upload_mime(""), "image/");
    }

    #[test]
    fn social_mime_strips_query_strings() {
        assert_eq!(social_mime("https://x/img.png?size=200"), "image/png");
        assert_eq!(social_mime("https://x/img.PNG"), "image/png");
    }

    #[test]
    fn social_mime_defaults_to_jpeg() {
        assert_eq!(social_mime("https://x/img"), "image/jpeg");
        assert_eq!(social_mime("https://x/img.gif"), "image/jpeg");
        assert_eq!(social_mime("https://x/"), "image/jpeg");
    }
}

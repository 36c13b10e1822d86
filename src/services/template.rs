//! Card markup
//!
//! Builds the self-contained 540x450 HTML page that the rasterizer turns into
//! a PNG: hero image under a dark gradient, avatar + author + reading time in
//! the top-left, the title below, the logo bottom-right.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::models::{Article, CardFields, MetadataPolicy};
use crate::services::{image_data_uri, reading_time_minutes};

/// Where card images are read from
#[derive(Clone, Debug)]
pub struct AssetPaths {
    pub images_dir: PathBuf,
    pub logo_file: String,
}

impl AssetPaths {
    pub fn new(images_dir: impl Into<PathBuf>, logo_file: impl Into<String>) -> Self {
        Self {
            images_dir: images_dir.into(),
            logo_file: logo_file.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.images_dir(), config.logo_file.clone())
    }

    pub fn image(&self, file_name: &str) -> PathBuf {
        self.images_dir.join(file_name)
    }

    pub fn logo(&self) -> PathBuf {
        self.image(&self.logo_file)
    }
}

/// Images inlined into the card, as data URIs
#[derive(Clone, Debug, Default)]
pub struct CardImages {
    pub logo: String,
    pub hero: String,
    pub avatar: String,
}

/// Turns parsed articles into card markup
#[derive(Clone, Debug)]
pub struct TemplateBuilder {
    assets: AssetPaths,
    policy: MetadataPolicy,
}

impl TemplateBuilder {
    pub fn new(assets: AssetPaths, policy: MetadataPolicy) -> Self {
        Self { assets, policy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(AssetPaths::from_config(config), config.metadata_policy)
    }

    /// Builds the card page for `article`. Fails if any of its images can't be read.
    pub async fn build(&self, article: &Article) -> Result<String> {
        let fields = article.card_fields(self.policy)?;
        let minutes = reading_time_minutes(&article.body);

        let logo_path = self.assets.logo();
        let hero_path = self.assets.image(&fields.hero);
        let avatar_path = self.assets.image(&fields.author_avatar);

        let (logo, hero, avatar) = tokio::try_join!(
            image_data_uri(&logo_path),
            image_data_uri(&hero_path),
            image_data_uri(&avatar_path),
        )?;

        Ok(render_card(&fields, minutes, &CardImages { logo, hero, avatar }))
    }
}

/// Fills the card template. Pure; image values must already be URIs.
pub fn render_card(fields: &CardFields, minutes: u32, images: &CardImages) -> String {
    let title = escape_html(&fields.title);
    let author = escape_html(&fields.author);
    let hero = escape_css_url(&images.hero);
    let avatar = escape_attr(&images.avatar);
    let logo = escape_attr(&images.logo);

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <style>
    html, body {{
        width: 540px;
        max-width: 540px;
        height: 450px;
        max-height: 450px;
        margin: 0;
        padding: 0;
        overflow: hidden;
        color: white;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif, "Apple Color Emoji", "Segoe UI Emoji", "Segoe UI Symbol";
    }}

    body {{
        background-image:
          linear-gradient(0deg, rgba(0,0,0, .51), rgba(0,0,0, .27), rgba(0,0,0,.27), rgba(0,0,0, .51)),
          url('{hero}');
        background-size: cover;
        background-position: center center;
        background-repeat: no-repeat;
        font-feature-settings: 'kern';
        -webkit-font-smoothing: antialiased;
    }}

    h1 {{
        font-size: 42px;
        color: #FFFFFF;
        line-height: 52px;
        text-shadow: 0 2px 1px rgba(0,0,0,0.70);
    }}

    .author {{
        font-size: 18px;
        font-weight: 500;
        color: #FFFFFF;
        line-height: 1.5;
    }}

    .minutes {{
        opacity: 0.88;
        font-weight: 500;
        font-size: 18px;
        color: #DEDEDE;
    }}

    .avatar {{
        margin-right: 8px;
        border-radius: 50%;
        width: 48px;
        height: 48px;
        object-fit: cover;
        border: 2px solid white;
    }}

    .logo {{ margin-bottom: 24px; width: 181px; }}

    .flexbox-col {{
        display: flex !important;
        flex-direction: column;
        flex-wrap: nowrap;
    }}

    .flexbox-row {{ display: flex !important; }}

    .stretch {{ flex-grow: 1; }}

    .justify-space-between {{ justify-content: space-between; }}

    .justify-end {{ justify-content: flex-end; }}
    </style>
  </head>
  <body class="flexbox-col justify-space-between">
    <div class="stretch" style="margin-top: 24px; margin-left: 24px; margin-right: 24px;">
      <div class="flexbox-row">
        <img src="{avatar}" class="avatar" />
        <div class="flexbox-col">
          <div class="author">{author}</div>
          <div class="minutes">{minutes} min read</div>
        </div>
      </div>
      <h1>{title}</h1>
    </div>
    <div class="flexbox-row justify-end" style="margin-left: 24px; margin-right: 24px;">
      <img src="{logo}" class="logo" />
    </div>
  </body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    value.replace('"', "%22")
}

fn escape_css_url(value: &str) -> String {
    value.replace('\'', "%27")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> CardFields {
        CardFields {
            title: title.to_string(),
            author: "Ann Lee".to_string(),
            author_avatar: "ann.jpg".to_string(),
            hero: "hero.jpg".to_string(),
        }
    }

    fn images() -> CardImages {
        CardImages {
            logo: "data:image/jpeg;base64,TE9HTw==".to_string(),
            hero: "data:image/jpeg;base64,SEVSTw==".to_string(),
            avatar: "data:image/jpeg;base64,QVZBVEFS".to_string(),
        }
    }

    #[test]
    fn card_contains_title_author_and_minutes() {
        let html = render_card(&fields("Hello World"), 3, &images());
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains(r#"<div class="author">Ann Lee</div>"#));
        assert!(html.contains("3 min read"));
        assert!(html.contains("url('data:image/jpeg;base64,SEVSTw==')"));
        assert!(html.contains(r#"<img src="data:image/jpeg;base64,QVZBVEFS" class="avatar" />"#));
        assert!(html.contains(r#"<img src="data:image/jpeg;base64,TE9HTw==" class="logo" />"#));
        assert!(html.contains("width: 540px;"));
        assert!(html.contains("height: 450px;"));
    }

    #[test]
    fn text_is_escaped() {
        let html = render_card(&fields("<script>alert(1)</script> & more"), 1, &images());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn asset_paths_resolve_under_images_dir() {
        let assets = AssetPaths::new("/site/assets/images", "logo.png");
        assert_eq!(assets.logo(), PathBuf::from("/site/assets/images/logo.png"));
        assert_eq!(assets.image("hero.jpg"), PathBuf::from("/site/assets/images/hero.jpg"));
    }

    #[tokio::test]
    async fn build_embeds_all_three_images() {
        use crate::models::Metadata;
        use serde_json::json;

        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("logo.png"), b"L").unwrap();
        std::fs::write(tmp.path().join("hero.jpg"), b"H").unwrap();
        std::fs::write(tmp.path().join("ann.jpg"), b"A").unwrap();

        let serde_json::Value::Object(map) = json!({
            "title": "Hello World",
            "author": "Ann Lee",
            "authoravatar": "ann.jpg",
            "hero": "hero.jpg",
        }) else {
            unreachable!()
        };
        let article = Article {
            path: PathBuf::from("content/hello.md"),
            metadata: Metadata::new(map),
            body: "a few words".to_string(),
        };

        let builder = TemplateBuilder::new(
            AssetPaths::new(tmp.path(), "logo.png"),
            MetadataPolicy::Permissive,
        );
        let html = builder.build(&article).await.unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("1 min read"));
        assert!(html.contains("data:image/jpeg;base64,TA=="));
        assert!(html.contains("data:image/jpeg;base64,SA=="));
        assert!(html.contains("data:image/jpeg;base64,QQ=="));

        std::fs::remove_file(tmp.path().join("hero.jpg")).unwrap();
        assert!(builder.build(&article).await.is_err());
    }
}

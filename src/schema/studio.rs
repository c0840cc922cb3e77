use serde::{Deserialize, Serialize};

use super::{
    FieldType, Layout, ListItem, Options, Preview, Rule, SchemaDocument, SchemaType,
};

pub static YOUTUBE_PREVIEW_COMPONENT: &str = "YouTubePreview";

/// Document and object types of the blog studio
pub fn studio_schema() -> SchemaDocument {
    SchemaDocument {
        name: "default".into(),
        types: vec![author(), blog(), comment(), youtube()],
    }
}

fn author() -> SchemaType {
    SchemaType::document("author", "Author")
        .with_field(SchemaType::field("name", FieldType::String).title("Name"))
        .with_field(SchemaType::field("avatar", FieldType::Image).title("Avatar"))
}

fn blog() -> SchemaType {
    SchemaType::document("blog", "Blog")
        .with_field(
            SchemaType::field("title", FieldType::String)
                .title("Title")
                .rule(Rule::Required)
                .rule(Rule::Min(5))
                .rule(Rule::Max(100)),
        )
        .with_field(SchemaType::field("subtitle", FieldType::String).title("Subtitle"))
        .with_field(
            SchemaType::field("coverImage", FieldType::Image)
                .title("Cover Image")
                .options(hotspot())
                .with_field(SchemaType::field("alt", FieldType::Text).title("Description")),
        )
        .with_field(
            SchemaType::field("content", FieldType::Array)
                .title("Content")
                .of(SchemaType::new(FieldType::Block))
                .of(content_image())
                .of(SchemaType::new(FieldType::Code).options(Options {
                    with_filename: Some(true),
                    ..Default::default()
                }))
                .of(SchemaType::new(FieldType::Named("youtube"))),
        )
        .with_field(
            SchemaType::field("date", FieldType::Datetime)
                .title("Date")
                .rule(Rule::Required),
        )
        .with_field(
            SchemaType::field("author", FieldType::Reference)
                .title("Author")
                .reference_to("author")
                .rule(Rule::Required),
        )
        .with_field(
            SchemaType::field("slug", FieldType::Slug)
                .title("Slug")
                .rule(Rule::Required),
        )
}

fn content_image() -> SchemaType {
    let highlighted = Options {
        is_highlighted: Some(true),
        ..Default::default()
    };

    SchemaType::new(FieldType::Image)
        .options(hotspot())
        .with_field(
            SchemaType::field("position", FieldType::String)
                .title("Position")
                .options(Options {
                    list: vec![
                        ListItem::new("Center", "center"),
                        ListItem::new("Left", "left"),
                        ListItem::new("Right", "right"),
                    ],
                    layout: Some(Layout::Radio),
                    ..highlighted.clone()
                }),
        )
        .with_field(
            SchemaType::field("alt", FieldType::Text)
                .title("Description")
                .options(highlighted),
        )
}

fn comment() -> SchemaType {
    SchemaType::document("comment", "Comment")
        .with_field(SchemaType::field("name", FieldType::String))
        .with_field(
            SchemaType::field("approved", FieldType::Boolean)
                .title("Approved")
                .description("Comments won't show on the site without approval"),
        )
        .with_field(SchemaType::field("email", FieldType::String))
        .with_field(SchemaType::field("comment", FieldType::Text))
        .with_field(SchemaType::field("blog", FieldType::Reference).reference_to("blog"))
        .preview(
            Preview::default()
                .select("name", "name")
                .select("comment", "comment")
                .select("post", "blog.title"),
        )
}

/// The embed object; blog content refers to it by name
fn youtube() -> SchemaType {
    SchemaType::object("youtube", "Youtube Embed")
        .with_field(SchemaType::field("url", FieldType::Url).title("URL"))
        .preview(
            Preview::default()
                .select("url", "url")
                .component(YOUTUBE_PREVIEW_COMPONENT),
        )
}

fn hotspot() -> Options {
    Options {
        hotspot: Some(true),
        ..Default::default()
    }
}

/// Values selected by the comment type's preview
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentPreview {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub post: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedPreview {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl CommentPreview {
    pub fn prepare(&self) -> PreparedPreview {
        let name = non_blank(&self.name).unwrap_or("Anonymous");
        let post = non_blank(&self.post).unwrap_or("untitled post");
        PreparedPreview {
            title: format!("{name} on {post}"),
            subtitle: self.comment.clone(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

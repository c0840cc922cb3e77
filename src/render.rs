use maud::{html, Markup};

use crate::embed::{extract_embed, EmbedDescriptor, VideoRef};

/// Capabilities granted to the player frame, nothing broader
pub static ALLOW: [&str; 7] = [
    "accelerometer",
    "autoplay",
    "clipboard-write",
    "encrypted-media",
    "fullscreen",
    "gyroscope",
    "picture-in-picture",
];

pub static FRAME_TITLE: &str = "YouTube video player";
pub static PLACEHOLDER: &str = "Missing YouTube URL.";

/// Widest frame the CLI accepts (8K)
pub const MAX_FRAME_WIDTH: u32 = 7680;

/// Frame width in CSS pixels; height always follows 16:9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
}

impl FrameSize {
    pub fn height(&self) -> u32 {
        // u32::MAX * 9 / 16 still fits in a u32
        u32::try_from(u64::from(self.width) * 9 / 16).unwrap_or(u32::MAX)
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self { width: 560 }
    }
}

pub fn embed_frame(embed: &EmbedDescriptor) -> Markup {
    embed_frame_sized(embed, FrameSize::default())
}

pub fn embed_frame_sized(embed: &EmbedDescriptor, size: FrameSize) -> Markup {
    match embed {
        EmbedDescriptor::Present { embed_url, .. } => html! {
            iframe
                src=(embed_url)
                width=(size.width)
                height=(size.height())
                title=(FRAME_TITLE)
                frameborder="0"
                allow=(ALLOW.join("; "))
                allowfullscreen {}
        },
        EmbedDescriptor::Missing { .. } => html! {
            div class="embed-missing" { (PLACEHOLDER) }
        },
    }
}

/// Extract and render in one step
pub fn preview(video: &VideoRef) -> Markup {
    embed_frame(&extract_embed(video))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frame() {
        let html = preview(&VideoRef::new("https://youtu.be/dQw4w9WgXcQ")).into_string();
        assert!(html.starts_with("<iframe "));
        assert!(html.ends_with("></iframe>"));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(html.contains(r#"width="560""#));
        assert!(html.contains(r#"height="315""#));
        assert!(html.contains(
            r#"allow="accelerometer; autoplay; clipboard-write; encrypted-media; fullscreen; gyroscope; picture-in-picture""#
        ));
        assert!(html.contains("allowfullscreen"));
        assert_eq!(html.matches("title=").count(), 1);
    }

    #[test]
    fn placeholder() {
        let html = preview(&VideoRef::new("")).into_string();
        assert_eq!(html, r#"<div class="embed-missing">Missing YouTube URL.</div>"#);
        assert!(!html.contains("iframe"));
    }

    #[test]
    fn custom_width() {
        let embed = extract_embed(&VideoRef::new("https://youtu.be/dQw4w9WgXcQ"));
        let html = embed_frame_sized(&embed, FrameSize { width: 1280 }).into_string();
        assert!(html.contains(r#"width="1280""#));
        assert!(html.contains(r#"height="720""#));
    }

    #[test]
    fn widest_frame() {
        let size = FrameSize {
            width: MAX_FRAME_WIDTH,
        };
        assert_eq!(size.height(), 4320);

        let embed = extract_embed(&VideoRef::new("https://youtu.be/dQw4w9WgXcQ"));
        let html = embed_frame_sized(&embed, size).into_string();
        assert!(html.contains(r#"width="7680""#));
        assert!(html.contains(r#"height="4320""#));
    }

    #[test]
    fn huge_width_does_not_overflow() {
        assert_eq!(FrameSize { width: 500_000_000 }.height(), 281_250_000);
        assert_eq!(FrameSize { width: u32::MAX }.height(), 2_415_919_103);
    }

    #[test]
    fn escapes_attributes() {
        let embed = EmbedDescriptor::Present {
            embed_url: r#"https://www.youtube.com/embed/x"onload="alert(1)"#.to_owned(),
            source_url: String::new(),
        };
        let html = embed_frame(&embed).into_string();
        assert!(!html.contains(r#""onload=""#));
        assert!(html.contains("&quot;"));
    }
}

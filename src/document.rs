use std::fmt::Write as _;

use getset::{CopyGetters, Getters};

use crate::{encode::png_data_uri, file_info::FileInfo};

/// Which path produced the visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum VisualSource {
    #[display("thumbnail")]
    Thumbnail,
    #[display("fallback icon")]
    FallbackIcon,
    /// Neither path produced an image
    #[display("none")]
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Visual {
    #[getset(get = "pub")]
    png: Vec<u8>,
    #[getset(get_copy = "pub")]
    source: VisualSource,
    #[getset(get_copy = "pub")]
    display_size: u32,
}

impl Visual {
    pub fn thumbnail(png: Vec<u8>, display_size: u32) -> Self {
        Self {
            png,
            source: VisualSource::Thumbnail,
            display_size,
        }
    }

    pub fn fallback_icon(png: Vec<u8>, display_size: u32) -> Self {
        Self {
            png,
            source: VisualSource::FallbackIcon,
            display_size,
        }
    }

    pub fn missing(display_size: u32) -> Self {
        Self {
            png: Vec::new(),
            source: VisualSource::Missing,
            display_size,
        }
    }

    /// A missing visual still gets its `<img>`, with an empty payload
    fn to_html(&self) -> String {
        format!(
            "<img src='{uri}' width='{size}' height='{size}' style='image-rendering: pixelated;' />",
            uri = png_data_uri(&self.png),
            size = self.display_size
        )
    }
}

/// Everything shown for one file. Immutable once composed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct PreviewDocument {
    #[getset(get = "pub")]
    file: FileInfo,
    #[getset(get = "pub")]
    visual: Visual,
    /// The metadata report, or the placeholder if the container couldn't be opened
    #[getset(get = "pub")]
    metadata: String,
    #[getset(get_copy = "pub")]
    frame_width: u32,
    #[getset(get_copy = "pub")]
    frame_height: u32,
}

const STYLE: &str = r#"
        html, body {
            margin: 0;
            padding: 0;
            background-color: transparent;
            font-family: -apple-system, system-ui, sans-serif;
            font-size: 13px;
            color: black;
            height: 100%;
        }
        .container {
            display: flex;
            flex-direction: row;
            height: 100%;
            box-sizing: border-box;
            padding: 16px;
        }
        .icon {
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .content {
            flex: 1;
            padding-left: 24px;
            display: flex;
            flex-direction: column;
            justify-content: flex-start;
        }
        .header {
            margin-bottom: 16px;
        }
        .header b {
            font-size: 16px;
            display: block;
            margin-bottom: 4px;
        }
        .metadata {
            white-space: pre-wrap;
            overflow-y: auto;
            color: #333;
        }
"#;

impl PreviewDocument {
    pub fn new(
        file: FileInfo,
        visual: Visual,
        metadata: String,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        Self {
            file,
            visual,
            metadata,
            frame_width,
            frame_height,
        }
    }

    /// Self-contained HTML page, the visual is inlined as a `data:` URI
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.visual.png.len() * 4 / 3 + 4096);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\" />\n");
        let _ = writeln!(
            html,
            "    <style>{STYLE}        body {{ width: {}px; height: {}px; }}\n        .icon {{ flex: 0 0 {}px; }}\n    </style>",
            self.frame_width,
            self.frame_height,
            self.visual.display_size
        );
        html.push_str("</head>\n<body>\n    <div class=\"container\">\n");
        let _ = writeln!(
            html,
            "        <div class=\"icon\">{}</div>",
            self.visual.to_html()
        );
        html.push_str("        <div class=\"content\">\n            <div class=\"header\">\n");
        let _ = writeln!(
            html,
            "                <b>{}</b>\n                Created: {}<br/>\n                Modified: {}<br/>\n                Size: {}",
            escape_html(self.file.name()),
            escape_html(self.file.created()),
            escape_html(self.file.modified()),
            escape_html(self.file.size()),
        );
        html.push_str("            </div>\n");
        let _ = writeln!(
            html,
            "            <div class=\"metadata\">{}</div>",
            escape_html(&self.metadata)
        );
        html.push_str("        </div>\n    </div>\n</body>\n</html>\n");
        html
    }
}

/// Escape text for use in element content and single or double quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

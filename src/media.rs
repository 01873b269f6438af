use {super::*, mime::Mime};

/// How an inscription's content should be presented, derived from its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
  Audio,
  Code,
  Font,
  Iframe,
  Image,
  Markdown,
  Model,
  Pdf,
  Text,
  Video,
  Unknown,
}

impl Media {
  pub fn from_content_type(content_type: &str) -> Self {
    let Ok(mime) = content_type.trim().parse::<Mime>() else {
      return Self::Unknown;
    };

    let (top, sub) = (mime.type_().as_str(), mime.subtype().as_str());

    match (top, sub) {
      ("text", "html") | ("image", "svg") => Self::Iframe,
      ("text", "markdown") => Self::Markdown,
      ("text", "css" | "javascript" | "x-python" | "x-rust")
      | ("application", "json" | "javascript" | "x-javascript" | "yaml" | "toml") => Self::Code,
      ("application", "pdf") => Self::Pdf,
      ("model", _) => Self::Model,
      ("image", _) => Self::Image,
      ("audio", _) => Self::Audio,
      ("video", _) => Self::Video,
      ("font", _) => Self::Font,
      ("text", _) => Self::Text,
      _ => Self::Unknown,
    }
  }
}

impl Display for Media {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Audio => "audio",
        Self::Code => "code",
        Self::Font => "font",
        Self::Iframe => "iframe",
        Self::Image => "image",
        Self::Markdown => "markdown",
        Self::Model => "model",
        Self::Pdf => "pdf",
        Self::Text => "text",
        Self::Video => "video",
        Self::Unknown => "unknown",
      }
    )
  }
}

use super::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Output {
  pub content_type: String,
  pub media: Media,
  pub length: usize,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct DataUriCommand {
  #[arg(help = "Decode <URI>.")]
  uri: String,
  #[arg(long, help = "Write the decoded payload to <OUTPUT>.")]
  output: Option<PathBuf>,
}

impl DataUriCommand {
  pub(crate) fn run(self) -> SubcommandResult {
    let uri = decode_data_uri(&self.uri)?;

    if let Some(path) = &self.output {
      fs::write(path, &uri.data)
        .with_context(|| format!("failed to write payload to `{}`", path.display()))?;
    }

    let media = Media::from_content_type(&uri.content_type);

    Ok(Box::new(Output {
      text: match media {
        Media::Text | Media::Code | Media::Markdown => String::from_utf8(uri.data.clone()).ok(),
        _ => None,
      },
      length: uri.data.len(),
      content_type: uri.content_type,
      media,
    }))
  }
}

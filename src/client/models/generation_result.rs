use serde::Deserialize;

/// Success body relayed by the proxy. The upstream returns `images`; the
/// OpenAI-style `data[].url` shape is accepted as well.
#[derive(Debug, Default, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<Vec<GenerationResultData>>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationResultData {
    #[serde(default)]
    pub url: Option<String>,
}

impl GenerationResult {
    pub fn into_urls(self) -> Vec<String> {
        if let Some(images) = self.images {
            return images;
        }

        self.data
            .unwrap_or_default()
            .into_iter()
            .filter_map(|data| data.url)
            .collect()
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    #[default]
    Square,
    Landscape,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [Self::Square, Self::Landscape, Self::Portrait];

    /// Upstream `size` value.
    pub fn size(&self) -> &'static str {
        match *self {
            Self::Square => "1024x1024",
            Self::Landscape => "1792x1024",
            Self::Portrait => "1024x1792",
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::Square => "Square",
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
        }
    }

    pub fn from_size(size: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ratio| ratio.size() == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_map_back_to_ratios() {
        assert_eq!(AspectRatio::from_size("1792x1024"), Some(AspectRatio::Landscape));
        assert_eq!(AspectRatio::from_size("1024x1792"), Some(AspectRatio::Portrait));
        assert_eq!(AspectRatio::from_size("512x512"), None);
    }
}

use serde::Serialize;

/// Gallery a filter belongs to. Each gallery is its own dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FilterCategory {
    FaceFilters,
    FaceDeform,
    Overlays,
}

impl FilterCategory {
    pub fn all() -> &'static [FilterCategory] {
        &[
            FilterCategory::FaceFilters,
            FilterCategory::FaceDeform,
            FilterCategory::Overlays,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::FaceFilters => "Face Filters",
            FilterCategory::FaceDeform => "Face Deform",
            FilterCategory::Overlays => "Overlays",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            FilterCategory::FaceFilters => {
                "Select a filter to apply to your video to see object overlay on your face in real-time"
            }
            FilterCategory::FaceDeform => {
                "Select a filter to apply to your video to see your face deform in real-time"
            }
            FilterCategory::Overlays => {
                "Select an overlay to apply an effect over your whole camera view in real-time"
            }
        }
    }
}

/// An AR camera filter hosted on a third-party lens platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArFilter {
    pub id: u32,
    pub name: &'static str,
    pub short_desc: &'static str,
    pub long_desc: &'static str,
    pub image_url: &'static str,
    pub rating: f32,
    /// Opens the filter on the lens platform
    pub link: &'static str,
}

impl ArFilter {
    /// One star per whole rating point
    pub fn stars(&self) -> String {
        "⭐".repeat(self.rating.max(0.0).floor() as usize)
    }

    pub fn rating_line(&self) -> String {
        format!("{} ({})", self.stars(), self.rating)
    }

    pub fn is_remote_image(&self) -> bool {
        self.image_url.starts_with("http")
    }
}

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// One row per UTC day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub date: String,
    pub page_views: i64,
    pub video_views: i64,
    pub button_clicks: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub days: i64,
    pub page_views: i64,
    pub video_views: i64,
    pub button_clicks: i64,
}

/// Counter bumped by a beacon. `as_ref()` is the column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AnalyticsEvent {
    PageViews,
    VideoViews,
    ButtonClicks,
}

impl AnalyticsEvent {
    pub fn label(self) -> &'static str {
        match self {
            AnalyticsEvent::PageViews => "Page view",
            AnalyticsEvent::VideoViews => "Video view",
            AnalyticsEvent::ButtonClicks => "Button click",
        }
    }
}

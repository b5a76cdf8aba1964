use crate::catalog::{Achievement, CategoryKind};
use crate::leveling::LevelProgress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: u64,
    pub category: String,
    pub title: String,
    pub points: i64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub kind: CategoryKind,
    pub total_points: i64,
    pub activities: Vec<Activity>,
}

impl Category {
    pub fn seeded(kind: CategoryKind) -> Self {
        Self {
            kind,
            total_points: kind.seed_points(),
            activities: Vec::new(),
        }
    }
}

/// An unvalidated submission, fields exactly as the user typed them.
/// Also backs the entry form of the open category dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityDraft {
    pub category: Option<CategoryKind>,
    pub title: String,
    pub points: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Award,
    LevelUp,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub icon: Option<&'static str>,
    pub message: String,
}

impl Notification {
    pub fn award(points: i64, title: &str) -> Self {
        Self {
            kind: NotificationKind::Award,
            icon: Some("⭐"),
            message: format!("+{points} баллов за \"{title}\""),
        }
    }

    pub fn level_up(level: u32) -> Self {
        Self {
            kind: NotificationKind::LevelUp,
            icon: Some("🎉"),
            message: format!("Новый уровень! Вы достигли {level} уровня!"),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            icon: None,
            message: message.into(),
        }
    }
}

/// Result of one successful award.
#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub activity: Activity,
    pub category_total: i64,
    pub total_points: i64,
    pub progress: LevelProgress,
    pub leveled_up_to: Option<u32>,
}

/// Points arrive either as a JSON number or as the raw text of the form field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PointsInput {
    Number(i64),
    Float(f64),
    Text(String),
}

impl PointsInput {
    pub fn into_text(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordActivityRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub points: Option<PointsInput>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenCategoryForm {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct ActivityForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct AwardResponse {
    pub activity: Activity,
    pub category_total: i64,
    pub total_points: i64,
    pub level: u32,
    pub progress_to_next_level: f64,
    pub leveled_up: bool,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct ProgressView {
    pub total_points: i64,
    pub level: u32,
    pub next_level: u32,
    pub progress_to_next_level: f64,
    pub progress_percent: i64,
    pub points_to_next_level: i64,
}

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub total_points: i64,
    pub activity_count: usize,
    pub activity_label: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioSnapshot {
    pub progress: ProgressView,
    pub categories: Vec<CategoryView>,
    pub achievements: Vec<Achievement>,
    pub form: ActivityDraft,
}

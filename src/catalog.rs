use serde::{Deserialize, Serialize};

/// The fixed set of activity categories. Order here is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Quality,
    Program,
    Education,
    Regional,
    Projects,
    Teacher,
    Children,
    Hr,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 8] = [
        CategoryKind::Quality,
        CategoryKind::Program,
        CategoryKind::Education,
        CategoryKind::Regional,
        CategoryKind::Projects,
        CategoryKind::Teacher,
        CategoryKind::Children,
        CategoryKind::Hr,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Program => "program",
            Self::Education => "education",
            Self::Regional => "regional",
            Self::Projects => "projects",
            Self::Teacher => "teacher",
            Self::Children => "children",
            Self::Hr => "hr",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Quality => "Качество занятий",
            Self::Program => "Парциальная программа",
            Self::Education => "Самообразование",
            Self::Regional => "Региональный компонент",
            Self::Projects => "Реализация проектов",
            Self::Teacher => "Участие педагога",
            Self::Children => "Участие детей",
            Self::Hr => "Кадровая работа",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Quality => "Star",
            Self::Program => "BookOpen",
            Self::Education => "GraduationCap",
            Self::Regional => "MapPin",
            Self::Projects => "Lightbulb",
            Self::Teacher => "UserCheck",
            Self::Children => "Users",
            Self::Hr => "Briefcase",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Quality | Self::Projects => "bg-primary",
            Self::Program | Self::Teacher => "bg-secondary",
            Self::Education | Self::Children => "bg-accent",
            Self::Regional | Self::Hr => "bg-success",
        }
    }

    /// Points the category starts with on every fresh process.
    pub const fn seed_points(self) -> i64 {
        match self {
            Self::Quality => 320,
            Self::Program => 180,
            Self::Education => 240,
            Self::Regional => 150,
            Self::Projects => 200,
            Self::Teacher => 90,
            Self::Children => 50,
            Self::Hr => 20,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub name: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { name: "Первые шаги", icon: "Award", unlocked: true },
    Achievement { name: "Профессионал", icon: "Trophy", unlocked: true },
    Achievement { name: "Мастер", icon: "Crown", unlocked: false },
    Achievement { name: "Легенда", icon: "Zap", unlocked: false },
];

pub fn seed_total_points() -> i64 {
    CategoryKind::ALL.iter().map(|kind| kind.seed_points()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_totals_sum_to_starting_balance() {
        assert_eq!(seed_total_points(), 1250);
    }

    #[test]
    fn ids_round_trip_through_lookup() {
        for kind in CategoryKind::ALL {
            assert_eq!(CategoryKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(CategoryKind::from_id(" hr "), Some(CategoryKind::Hr));
        assert_eq!(CategoryKind::from_id("sports"), None);
        assert_eq!(CategoryKind::from_id(""), None);
    }
}

use crate::catalog::{CategoryKind, seed_total_points};
use crate::errors::ValidationError;
use crate::leveling::LevelProgress;
use crate::models::{Activity, ActivityDraft, Award, Category, Notification};
use crate::notify::Notifier;
use chrono::{DateTime, Local};
use tracing::{info, warn};

/// Owns every piece of portfolio state. `record_activity` is the only way
/// points change; readers take snapshots through `summary`.
#[derive(Debug, Clone)]
pub struct PortfolioStore {
    categories: Vec<Category>,
    total_points: i64,
    progress: LevelProgress,
    form: ActivityDraft,
    last_activity_id: u64,
}

impl Default for PortfolioStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// A submission that passed validation, ready to apply.
struct ValidSubmission {
    kind: CategoryKind,
    title: String,
    points: i64,
    description: Option<String>,
}

impl PortfolioStore {
    pub fn seeded() -> Self {
        Self {
            categories: CategoryKind::ALL.into_iter().map(Category::seeded).collect(),
            total_points: seed_total_points(),
            progress: LevelProgress::default(),
            form: ActivityDraft::default(),
            last_activity_id: 0,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, kind: CategoryKind) -> &Category {
        // Categories are seeded from `CategoryKind::ALL`, so the index always matches.
        &self.categories[Self::index_of(kind)]
    }

    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    pub fn progress(&self) -> LevelProgress {
        self.progress
    }

    pub fn form(&self) -> &ActivityDraft {
        &self.form
    }

    pub fn selected_category(&self) -> Option<CategoryKind> {
        self.form.category
    }

    pub fn select_category(&mut self, kind: CategoryKind) {
        self.form.category = Some(kind);
    }

    pub fn close_category(&mut self) {
        self.form.category = None;
    }

    pub fn update_form(&mut self, title: String, points: String, description: String) {
        self.form.title = title;
        self.form.points = points;
        self.form.description = description;
    }

    /// Submits the entry form. The form is cleared and the category closed
    /// only when the award applies; on error everything typed stays put.
    pub fn submit_form(&mut self, notifier: &mut impl Notifier) -> Result<Award, ValidationError> {
        let draft = self.form.clone();
        let award = self.record_activity(&draft, notifier)?;
        self.form = ActivityDraft::default();
        Ok(award)
    }

    pub fn record_activity(
        &mut self,
        draft: &ActivityDraft,
        notifier: &mut impl Notifier,
    ) -> Result<Award, ValidationError> {
        self.record_activity_at(draft, Local::now(), notifier)
    }

    /// Validates and applies one award as a single transition.
    pub fn record_activity_at(
        &mut self,
        draft: &ActivityDraft,
        now: DateTime<Local>,
        notifier: &mut impl Notifier,
    ) -> Result<Award, ValidationError> {
        let submission = match self.validate(draft) {
            Ok(submission) => submission,
            Err(err) => {
                warn!(error = %err, "rejected activity submission");
                notifier.notify(Notification::error(err.user_message()));
                return Err(err);
            }
        };

        let award = self.apply(submission, now);

        if let Some(level) = award.leveled_up_to {
            info!(level, "level up");
            notifier.notify(Notification::level_up(level));
        }
        notifier.notify(Notification::award(award.activity.points, &award.activity.title));

        Ok(award)
    }

    fn validate(&self, draft: &ActivityDraft) -> Result<ValidSubmission, ValidationError> {
        let kind = draft.category.ok_or(ValidationError::MissingCategory)?;

        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let points = parse_points(&draft.points)?;

        let category_total = self.category(kind).total_points;
        if category_total.checked_add(points).is_none()
            || self.total_points.checked_add(points).is_none()
        {
            return Err(ValidationError::PointsOutOfRange(points));
        }

        let description = draft.description.trim();
        Ok(ValidSubmission {
            kind,
            title: title.to_string(),
            points,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }

    fn apply(&mut self, submission: ValidSubmission, now: DateTime<Local>) -> Award {
        let id = self.next_activity_id(now);
        let activity = Activity {
            id,
            category: submission.kind.name().to_string(),
            title: submission.title,
            points: submission.points,
            date: format_display_date(now),
            description: submission.description,
        };

        let category = &mut self.categories[Self::index_of(submission.kind)];
        category.total_points += activity.points;
        category.activities.push(activity.clone());
        let category_total = category.total_points;

        self.total_points += activity.points;
        let leveled_up_to = self.progress.advance(activity.points);

        info!(
            category = submission.kind.id(),
            points = activity.points,
            total = self.total_points,
            "recorded activity"
        );

        Award {
            activity,
            category_total,
            total_points: self.total_points,
            progress: self.progress,
            leveled_up_to,
        }
    }

    fn next_activity_id(&mut self, now: DateTime<Local>) -> u64 {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_activity_id.saturating_add(1));
        self.last_activity_id = id;
        id
    }

    fn index_of(kind: CategoryKind) -> usize {
        kind as usize
    }
}

pub fn parse_points(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingPoints);
    }
    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidPoints(raw.to_string()))
}

/// Day/month/year, the ru-RU convention.
pub fn format_display_date(now: DateTime<Local>) -> String {
    now.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap()
    }

    fn draft(kind: Option<CategoryKind>, title: &str, points: &str, description: &str) -> ActivityDraft {
        ActivityDraft {
            category: kind,
            title: title.to_string(),
            points: points.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn open_lesson_scenario_levels_up() {
        let mut store = PortfolioStore::seeded();
        let mut toasts: Vec<Notification> = Vec::new();
        let before = store.total_points();

        store.select_category(CategoryKind::Quality);
        store.update_form("Открытый урок".into(), "800".into(), String::new());
        let award = store.submit_form(&mut toasts).unwrap();

        assert_eq!(store.category(CategoryKind::Quality).total_points, 1120);
        assert_eq!(store.total_points(), before + 800);
        assert_eq!(store.progress().level, 6);
        assert_eq!(store.progress().progress_to_next_level, 2.0);
        assert_eq!(award.leveled_up_to, Some(6));
        assert_eq!(
            toasts,
            vec![
                Notification::level_up(6),
                Notification::award(800, "Открытый урок"),
            ]
        );
        assert_eq!(store.form(), &ActivityDraft::default());
        assert_eq!(store.selected_category(), None);
    }

    #[test]
    fn activity_carries_category_name_and_date() {
        let mut store = PortfolioStore::seeded();
        let mut toasts: Vec<Notification> = Vec::new();
        let award = store
            .record_activity_at(
                &draft(Some(CategoryKind::Hr), "  Наставничество ", "15", " помощь коллеге "),
                fixed_now(),
                &mut toasts,
            )
            .unwrap();

        assert_eq!(award.activity.category, "Кадровая работа");
        assert_eq!(award.activity.title, "Наставничество");
        assert_eq!(award.activity.date, "09.03.2026");
        assert_eq!(award.activity.description.as_deref(), Some("помощь коллеге"));
        assert_eq!(store.category(CategoryKind::Hr).activities, vec![award.activity]);
    }

    #[test]
    fn blank_description_is_omitted() {
        let mut store = PortfolioStore::seeded();
        let award = store
            .record_activity_at(&draft(Some(CategoryKind::Hr), "x", "1", "   "), fixed_now(), &mut Vec::<Notification>::new())
            .unwrap();
        assert_eq!(award.activity.description, None);
    }

    #[test]
    fn blank_points_keeps_form_and_state() {
        let mut store = PortfolioStore::seeded();
        let mut toasts: Vec<Notification> = Vec::new();
        store.select_category(CategoryKind::Program);
        store.update_form("Вебинар".into(), String::new(), "заметки".into());
        let untouched = store.clone();

        let err = store.submit_form(&mut toasts).unwrap_err();

        assert_eq!(err, ValidationError::MissingPoints);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Error);
        assert_eq!(toasts[0].message, "Заполните все поля");
        assert_eq!(store.form(), untouched.form());
        assert_eq!(store.selected_category(), Some(CategoryKind::Program));
        assert_eq!(store.categories(), untouched.categories());
        assert_eq!(store.total_points(), untouched.total_points());
        assert_eq!(store.progress(), untouched.progress());
    }

    #[test]
    fn each_invalid_field_is_rejected() {
        let cases = [
            (draft(None, "t", "5", ""), ValidationError::MissingCategory),
            (draft(Some(CategoryKind::Quality), "   ", "5", ""), ValidationError::EmptyTitle),
            (draft(Some(CategoryKind::Quality), "t", "", ""), ValidationError::MissingPoints),
            (
                draft(Some(CategoryKind::Quality), "t", "12abc", ""),
                ValidationError::InvalidPoints("12abc".into()),
            ),
            (
                draft(Some(CategoryKind::Quality), "t", "1.5", ""),
                ValidationError::InvalidPoints("1.5".into()),
            ),
        ];

        for (input, expected) in cases {
            let mut store = PortfolioStore::seeded();
            let mut toasts: Vec<Notification> = Vec::new();
            let err = store.record_activity_at(&input, fixed_now(), &mut toasts).unwrap_err();
            assert_eq!(err, expected);
            assert_eq!(toasts.len(), 1);
            assert_eq!(store.total_points(), 1250);
        }
    }

    #[test]
    fn overflowing_points_are_rejected() {
        let mut store = PortfolioStore::seeded();
        let mut toasts: Vec<Notification> = Vec::new();
        let err = store
            .record_activity_at(
                &draft(Some(CategoryKind::Quality), "t", &i64::MAX.to_string(), ""),
                fixed_now(),
                &mut toasts,
            )
            .unwrap_err();
        assert_eq!(err, ValidationError::PointsOutOfRange(i64::MAX));
        assert_eq!(store.total_points(), 1250);
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn negative_points_are_accepted() {
        let mut store = PortfolioStore::seeded();
        let award = store
            .record_activity_at(&draft(Some(CategoryKind::Children), "штраф", "-60", ""), fixed_now(), &mut Vec::<Notification>::new())
            .unwrap();
        assert_eq!(award.category_total, -10);
        assert_eq!(store.total_points(), 1190);
        assert_eq!(store.progress().progress_to_next_level, 59.0);
    }

    #[test]
    fn ids_increase_within_same_millisecond() {
        let mut store = PortfolioStore::seeded();
        let first = store
            .record_activity_at(&draft(Some(CategoryKind::Hr), "a", "1", ""), fixed_now(), &mut Vec::<Notification>::new())
            .unwrap();
        let second = store
            .record_activity_at(&draft(Some(CategoryKind::Hr), "b", "1", ""), fixed_now(), &mut Vec::<Notification>::new())
            .unwrap();
        assert!(second.activity.id > first.activity.id);
    }

    #[test]
    fn repeated_awards_transition_once_each() {
        let mut store = PortfolioStore::seeded();
        let mut toasts: Vec<Notification> = Vec::new();
        let input = draft(Some(CategoryKind::Projects), "Проект", "1000", "");
        store.record_activity_at(&input, fixed_now(), &mut toasts).unwrap();
        store.record_activity_at(&input, fixed_now(), &mut toasts).unwrap();

        assert_eq!(store.total_points(), 1250 + 2000);
        // 62 + 50 = 112 -> level 6 at 12, then 12 + 50 = 62 -> no change
        assert_eq!(store.progress().level, 6);
        assert_eq!(store.progress().progress_to_next_level, 62.0);
        let level_ups = toasts
            .iter()
            .filter(|toast| toast.kind == NotificationKind::LevelUp)
            .count();
        assert_eq!(level_ups, 1);
    }

    #[test]
    fn closing_category_keeps_typed_text() {
        let mut store = PortfolioStore::seeded();
        store.select_category(CategoryKind::Regional);
        store.update_form("Экскурсия".into(), "30".into(), String::new());
        store.close_category();
        assert_eq!(store.selected_category(), None);
        assert_eq!(store.form().title, "Экскурсия");
    }
}

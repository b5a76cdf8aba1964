use crate::catalog::ACHIEVEMENTS;
use crate::models::{CategoryView, PortfolioSnapshot, ProgressView};
use crate::store::PortfolioStore;

pub fn build_snapshot(store: &PortfolioStore) -> PortfolioSnapshot {
    let progress = store.progress();

    let categories = store
        .categories()
        .iter()
        .map(|category| {
            let kind = category.kind;
            let count = category.activities.len();
            CategoryView {
                id: kind.id(),
                name: kind.name(),
                icon: kind.icon(),
                color: kind.color(),
                total_points: category.total_points,
                activity_count: count,
                activity_label: activity_label(count),
                activities: category.activities.clone(),
            }
        })
        .collect();

    PortfolioSnapshot {
        progress: ProgressView {
            total_points: store.total_points(),
            level: progress.level,
            next_level: progress.next_level(),
            progress_to_next_level: progress.progress_to_next_level,
            progress_percent: progress.rounded_percent(),
            points_to_next_level: progress.points_to_next_level(),
        },
        categories,
        achievements: ACHIEVEMENTS.to_vec(),
        form: store.form().clone(),
    }
}

pub fn activity_label(count: usize) -> String {
    if count == 1 {
        format!("{count} активность")
    } else {
        format!("{count} активностей")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryKind;
    use crate::models::{ActivityDraft, Notification};

    #[test]
    fn seed_snapshot_matches_catalog() {
        let snapshot = build_snapshot(&PortfolioStore::seeded());
        assert_eq!(snapshot.progress.total_points, 1250);
        assert_eq!(snapshot.progress.level, 5);
        assert_eq!(snapshot.progress.progress_percent, 62);
        assert_eq!(snapshot.progress.points_to_next_level, 760);
        assert_eq!(snapshot.categories.len(), 8);
        assert_eq!(snapshot.categories[0].id, "quality");
        assert_eq!(snapshot.categories[0].total_points, 320);
        assert_eq!(snapshot.categories[7].activity_label, "0 активностей");
        assert_eq!(snapshot.achievements.iter().filter(|a| a.unlocked).count(), 2);
    }

    #[test]
    fn category_totals_sum_to_global_total() {
        let mut store = PortfolioStore::seeded();
        let draft = ActivityDraft {
            category: Some(CategoryKind::Education),
            title: "Курсы".into(),
            points: "45".into(),
            description: String::new(),
        };
        store.record_activity(&draft, &mut Vec::<Notification>::new()).unwrap();

        let snapshot = build_snapshot(&store);
        let sum: i64 = snapshot.categories.iter().map(|c| c.total_points).sum();
        assert_eq!(sum, snapshot.progress.total_points);
        assert_eq!(snapshot.categories[2].activity_label, "1 активность");
    }

    #[test]
    fn label_pluralization() {
        assert_eq!(activity_label(0), "0 активностей");
        assert_eq!(activity_label(1), "1 активность");
        assert_eq!(activity_label(5), "5 активностей");
    }
}

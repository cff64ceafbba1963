#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use dolist::libs::projector::{project, Progress};
    use dolist::libs::task::{Category, Filter, Task, TaskId};
    use std::collections::HashSet;

    fn task(id: &str, category: Category, completed: bool) -> Task {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        Task {
            id: TaskId::new(id),
            title: format!("Task {}", id),
            category,
            completed,
            created_at,
            completed_at: completed.then_some(created_at),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", Category::Work, true),
            task("2", Category::Personal, false),
            task("3", Category::Work, true),
            task("4", Category::Study, false),
        ]
    }

    #[test]
    fn test_empty_list() {
        let view = project(&[], Filter::All, &HashSet::new());
        assert!(view.is_empty);
        assert!(view.visible.is_empty());
        assert_eq!(view.progress, Progress::default());
        assert_eq!(view.progress.to_string(), "0/0 완료");
    }

    #[test]
    fn test_progress_percentages() {
        assert_eq!(Progress::of(&sample()).percent, 50);

        let tasks = vec![task("1", Category::Work, true), task("2", Category::Work, false), task("3", Category::Work, false)];
        assert_eq!(Progress::of(&tasks).percent, 33);

        let tasks = vec![task("1", Category::Work, true), task("2", Category::Work, true), task("3", Category::Work, false)];
        assert_eq!(Progress::of(&tasks).percent, 67);

        let tasks = vec![task("1", Category::Work, true)];
        assert_eq!(Progress::of(&tasks).percent, 100);
    }

    #[test]
    fn test_all_filter_keeps_stored_order() {
        let tasks = sample();
        let view = project(&tasks, Filter::All, &HashSet::new());
        let ids: Vec<&str> = view.visible.iter().map(|item| item.task.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert!(!view.is_empty);
    }

    #[test]
    fn test_category_filter_is_subset_with_global_progress() {
        let tasks = sample();
        let view = project(&tasks, Filter::Category(Category::Work), &HashSet::new());
        let ids: Vec<&str> = view.visible.iter().map(|item| item.task.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(view.progress.to_string(), "2/4 완료");
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let tasks = vec![task("1", Category::Work, false)];
        let view = project(&tasks, Filter::Category(Category::Study), &HashSet::new());
        assert!(view.is_empty);
        assert_eq!(view.progress.total, 1);
    }

    #[test]
    fn test_editing_flag() {
        let tasks = sample();
        let editing: HashSet<TaskId> = [TaskId::new("2")].into_iter().collect();
        let view = project(&tasks, Filter::All, &editing);
        let flags: Vec<bool> = view.visible.iter().map(|item| item.editing).collect();
        assert_eq!(flags, [false, true, false, false]);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("전체".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("Study".parse::<Filter>().unwrap(), Filter::Category(Category::Study));
        assert_eq!("공부".parse::<Filter>().unwrap(), Filter::Category(Category::Study));
        assert!("chores".parse::<Filter>().is_err());
    }
}

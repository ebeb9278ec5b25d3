use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::task::{parse_due, Task, TaskStatus, HEADER_PREFIX, HEADER_SUFFIX, HEADER_UID_PREFIX};
use super::week::{week_start_for, WeekWindow};

/// Due-date display category. Derived fresh on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NoDueDate,
    ThisWeek,
    Forthcoming,
    Completed,
}

impl Category {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::NoDueDate => "no_due_date",
            Self::ThisWeek => "this_week",
            Self::Forthcoming => "forthcoming",
            Self::Completed => "completed",
        }
    }

    /// Display label, localized the way the host cards localize: Spanish for
    /// `es*` tags, English for everything else.
    pub fn label(&self, language: &str) -> &'static str {
        if language.starts_with("es") {
            match self {
                Self::NoDueDate => "Sin fecha de vencimiento",
                Self::ThisWeek => "Esta semana",
                Self::Forthcoming => "Próximamente",
                Self::Completed => "Completadas",
            }
        } else {
            match self {
                Self::NoDueDate => "No due date",
                Self::ThisWeek => "This week",
                Self::Forthcoming => "Forthcoming",
                Self::Completed => "Completed",
            }
        }
    }
}

/// Assign a task to exactly one display category.
///
/// Completed wins over everything; a missing or unparseable due date lands in
/// [`Category::NoDueDate`]; otherwise the locale week window containing
/// `today` decides between this-week and forthcoming (past dates before the
/// window are forthcoming too). Never errors.
pub fn classify(task: &Task, today: NaiveDate, language: &str) -> Category {
    let window = WeekWindow::containing(today, week_start_for(language));
    classify_in_window(task, &window)
}

fn classify_in_window(task: &Task, window: &WeekWindow) -> Category {
    if task.status.is_completed() {
        return Category::Completed;
    }
    let Some(raw) = task.due.as_deref() else {
        return Category::NoDueDate;
    };
    match parse_due(raw) {
        Some(due) if window.contains(due) => Category::ThisWeek,
        Some(_) => Category::Forthcoming,
        None => {
            log::debug!("unparseable due date {:?} on task {}", raw, task.uid);
            Category::NoDueDate
        }
    }
}

/// Tasks partitioned into the four display categories, sorted for render.
///
/// Within a bucket, tasks sort by due date ascending; undated or unparseable
/// dues sort last, keeping their input order.
#[derive(Debug, Clone, Default)]
pub struct GroupView {
    pub no_due_date: Vec<Task>,
    pub this_week: Vec<Task>,
    pub forthcoming: Vec<Task>,
    pub completed: Vec<Task>,
}

impl GroupView {
    pub fn build(tasks: &[Task], today: NaiveDate, language: &str) -> Self {
        let window = WeekWindow::containing(today, week_start_for(language));
        let mut view = Self::default();

        for task in tasks {
            match classify_in_window(task, &window) {
                Category::NoDueDate => view.no_due_date.push(task.clone()),
                Category::ThisWeek => view.this_week.push(task.clone()),
                Category::Forthcoming => view.forthcoming.push(task.clone()),
                Category::Completed => view.completed.push(task.clone()),
            }
        }

        for bucket in [
            &mut view.no_due_date,
            &mut view.this_week,
            &mut view.forthcoming,
            &mut view.completed,
        ] {
            // sort_by_key is stable, so equally-undated tasks keep input order
            bucket.sort_by_key(|t| t.due_date().unwrap_or(NaiveDate::MAX));
        }

        view
    }

    pub fn bucket(&self, category: Category) -> &[Task] {
        match category {
            Category::NoDueDate => &self.no_due_date,
            Category::ThisWeek => &self.this_week,
            Category::Forthcoming => &self.forthcoming,
            Category::Completed => &self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.no_due_date.len() + self.this_week.len() + self.forthcoming.len() + self.completed.len()
    }

    /// Flatten the active buckets into the host's legacy list shape: each
    /// non-empty bucket preceded by a synthetic header row. Completed tasks
    /// are excluded; the legacy surface shows those natively.
    pub fn flatten_with_headers(&self, language: &str) -> Vec<Task> {
        let mut out = Vec::new();
        for category in [Category::NoDueDate, Category::ThisWeek, Category::Forthcoming] {
            let bucket = self.bucket(category);
            if bucket.is_empty() {
                continue;
            }
            out.push(header_task(category, language));
            out.extend_from_slice(bucket);
        }
        out
    }
}

fn header_task(category: Category, language: &str) -> Task {
    Task {
        uid: format!("{}{}", HEADER_UID_PREFIX, category.as_key()),
        summary: format!("{}{}{}", HEADER_PREFIX, category.label(language), HEADER_SUFFIX),
        description: None,
        due: None,
        status: TaskStatus::NeedsAction,
    }
}

/// Short due-date display string: abbreviated month plus day, in the card's
/// two display languages. Unparseable input echoes back unchanged.
pub fn due_label(due: &str, language: &str) -> String {
    let Some(date) = parse_due(due) else {
        return due.to_string();
    };
    let month0 = date.month0() as usize;
    if language.starts_with("es") {
        const MONTHS: [&str; 12] = [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
        ];
        format!("{} {}", date.day(), MONTHS[month0])
    } else {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        format!("{} {}", MONTHS[month0], date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(uid: &str, due: Option<&str>, status: TaskStatus) -> Task {
        Task {
            uid: uid.into(),
            summary: format!("task {}", uid),
            description: None,
            due: due.map(String::from),
            status,
        }
    }

    // Thursday; Monday-start window is [2024-06-10, 2024-06-16]
    const TODAY: (i32, u32, u32) = (2024, 6, 13);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn completed_wins_over_due_date() {
        let t = task("a", Some("2024-06-12"), TaskStatus::Completed);
        assert_eq!(classify(&t, today(), "en"), Category::Completed);
        let t = task("b", None, TaskStatus::Completed);
        assert_eq!(classify(&t, today(), "en"), Category::Completed);
    }

    #[test]
    fn no_due_and_unparseable_due() {
        let t = task("a", None, TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::NoDueDate);
        let t = task("b", Some("soonish"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::NoDueDate);
    }

    #[test]
    fn window_membership() {
        // Due exactly today
        let t = task("a", Some("2024-06-13"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::ThisWeek);
        // Window edges
        let t = task("b", Some("2024-06-10"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::ThisWeek);
        let t = task("c", Some("2024-06-16"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::ThisWeek);
        // 8 days out, either direction, is forthcoming
        let t = task("d", Some("2024-06-21"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::Forthcoming);
        let t = task("e", Some("2024-06-05"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::Forthcoming);
        // Just before the window start (past) is also forthcoming
        let t = task("f", Some("2024-06-09"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en"), Category::Forthcoming);
    }

    #[test]
    fn sunday_start_shifts_the_window() {
        // en-US week containing Thursday 2024-06-13 is [06-09, 06-15]
        let t = task("a", Some("2024-06-09"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en-US"), Category::ThisWeek);
        let t = task("b", Some("2024-06-16"), TaskStatus::NeedsAction);
        assert_eq!(classify(&t, today(), "en-US"), Category::Forthcoming);
    }

    #[test]
    fn buckets_sort_by_due_with_undated_last() {
        let tasks = vec![
            task("a", Some("2024-03-10"), TaskStatus::NeedsAction),
            task("b", Some("2024-03-05"), TaskStatus::NeedsAction),
            task("c", None, TaskStatus::NeedsAction),
        ];
        let view = GroupView::build(&tasks, today(), "en");
        let order: Vec<&str> = view.forthcoming.iter().map(|t| t.uid.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(view.no_due_date[0].uid, "c");
    }

    #[test]
    fn undated_ties_keep_input_order() {
        let tasks = vec![
            task("first", None, TaskStatus::NeedsAction),
            task("second", None, TaskStatus::NeedsAction),
        ];
        let view = GroupView::build(&tasks, today(), "en");
        let order: Vec<&str> = view.no_due_date.iter().map(|t| t.uid.as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn empty_buckets_stay_present() {
        let view = GroupView::build(&[], today(), "en");
        assert!(view.no_due_date.is_empty());
        assert!(view.this_week.is_empty());
        assert!(view.forthcoming.is_empty());
        assert!(view.completed.is_empty());
        assert_eq!(view.total(), 0);
        assert!(view.flatten_with_headers("en").is_empty());
    }

    #[test]
    fn flatten_interleaves_headers_and_skips_completed() {
        let tasks = vec![
            task("w", Some("2024-06-12"), TaskStatus::NeedsAction),
            task("n", None, TaskStatus::NeedsAction),
            task("d", Some("2024-06-11"), TaskStatus::Completed),
        ];
        let view = GroupView::build(&tasks, today(), "en");
        let flat = view.flatten_with_headers("en");
        let uids: Vec<&str> = flat.iter().map(|t| t.uid.as_str()).collect();
        assert_eq!(uids, vec!["header_no_due_date", "n", "header_this_week", "w"]);
        assert_eq!(flat[0].summary, "--- No due date ---");
        assert!(flat[0].is_header());
        assert!(flat.iter().all(|t| t.uid != "d"));
    }

    #[test]
    fn labels_localize() {
        assert_eq!(Category::ThisWeek.label("en"), "This week");
        assert_eq!(Category::ThisWeek.label("es"), "Esta semana");
        assert_eq!(Category::Completed.label("es-MX"), "Completadas");
        assert_eq!(Category::NoDueDate.label("de"), "No due date");
    }

    #[test]
    fn due_labels() {
        assert_eq!(due_label("2024-03-05", "en"), "Mar 5");
        assert_eq!(due_label("2024-03-05", "es"), "5 mar");
        assert_eq!(due_label("2024-12-31", "en-US"), "Dec 31");
        assert_eq!(due_label("whenever", "en"), "whenever");
    }
}

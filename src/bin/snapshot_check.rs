use hearth::core::groups::{due_label, Category, GroupView};
use hearth::core::task::Task;
use hearth::state::ListSnapshot;

fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("hearth-snapshot-check".to_string())
        .install()
        .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: hearth-snapshot-check <snapshot.json> [language]");
        std::process::exit(2);
    };
    let language = args.next().unwrap_or_else(|| "en".to_string());

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("cannot read {}: {}", path, e);
            std::process::exit(1);
        }
    };
    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{} is not valid JSON: {}", path, e);
            std::process::exit(1);
        }
    };

    println!("=== Snapshot Grouping Report ===\n");

    let snapshot = ListSnapshot::from_value(&value);
    let tasks: Vec<Task> = snapshot.all_tasks().cloned().collect();
    println!(
        "Snapshot: {} active, {} completed, {} recurrence rules, total_tasks={}\n",
        snapshot.active_tasks().count(),
        snapshot.completed_items.len(),
        snapshot.recurrence_data.len(),
        snapshot.total_tasks,
    );

    let today = chrono::Local::now().date_naive();
    let view = GroupView::build(&tasks, today, &language);

    for category in [
        Category::NoDueDate,
        Category::ThisWeek,
        Category::Forthcoming,
        Category::Completed,
    ] {
        let bucket = view.bucket(category);
        println!("--- {} ({}) ---", category.label(&language), bucket.len());
        for task in bucket {
            let due = task
                .due
                .as_deref()
                .map(|d| due_label(d, &language))
                .unwrap_or_default();
            let recurring = if snapshot.rule_for(&task.uid).is_some() {
                "  [recurring]"
            } else {
                ""
            };
            println!("  {:12} {}  {}{}", due, task.uid, task.summary, recurring);
        }
        println!();
    }

    let active = view.total() - view.completed.len();
    let headers = view.flatten_with_headers(&language).len() - active;
    log::info!(
        "snapshot check: {} tasks grouped, {} legacy headers",
        view.total(),
        headers
    );
    println!("=== Done ===");
}

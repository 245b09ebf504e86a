use chrono::NaiveDate;
use todotxt_core::{Task, TasksConfig};

/// One `kind:'text'` line per token.
pub fn tokens(task: &Task) -> String {
    task.tokens()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Human readable summary of a task's attributes.
pub fn describe(task: &Task, config: &TasksConfig, today: NaiveDate) -> String {
    let hidden = config.hidden_kind_set();
    let completed = match task.completion_date_text() {
        Some(date) => format!("yes ({date})"),
        None if task.is_completed() => String::from("yes"),
        None => String::from("no"),
    };
    let mut lines = vec![
        format!("line:       {}", task.in_file_format()),
        format!("screen:     {}", task.in_screen_format(&hidden)),
        format!("priority:   {}", task.priority()),
        format!("completed:  {completed}"),
    ];

    if let (Some(date), Some(age)) = (task.creation_date_text(), task.relative_age_at(today)) {
        lines.push(format!("created:    {date} ({age})"));
    }
    if let Some(due) = task.due_date_text() {
        let validity = if task.due_date().is_some() { "" } else { " (invalid)" };
        lines.push(format!("due:        {due}{validity}"));
    }
    let threshold = task.threshold_date_text("");
    if !threshold.is_empty() {
        let state = match task.threshold_date() {
            None => " (invalid)",
            Some(_) if task.in_future_at(today) => " (future)",
            Some(_) => "",
        };
        lines.push(format!("threshold:  {threshold}{state}"));
    }
    if let Some(pattern) = task.recurrence_pattern() {
        lines.push(format!("recurrence: {pattern}"));
    }
    let tags = task.tags();
    if !tags.is_empty() {
        lines.push(format!("tags:       {}", tags.into_iter().collect::<Vec<_>>().join(" ")));
    }
    let lists = task.lists();
    if !lists.is_empty() {
        lines.push(format!("lists:      {}", lists.into_iter().collect::<Vec<_>>().join(" ")));
    }
    lines.push(format!("visible:    {}", task.is_visible()));
    lines.join("\n")
}

/// Screen format of every task of `content` that should be listed today.
pub fn list(content: &str, config: &TasksConfig, today: NaiveDate) -> Vec<String> {
    let hidden = config.hidden_kind_set();
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Task::new(index + 1, line))
        .filter(|task| config.show_hidden || task.is_visible())
        .filter(|task| config.show_future || !task.in_future_at(today))
        .map(|task| task.in_screen_format(&hidden))
        .collect()
}

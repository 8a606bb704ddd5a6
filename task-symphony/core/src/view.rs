//! Projection of the store into what the page shows.
//!
//! The view model is rebuilt from scratch on every refresh; the front-end
//! replaces the visible list with it instead of diffing.
use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use rand::Rng;
use std::fmt::Display;

use crate::filter::Filter;
use crate::store::TaskStore;
use crate::task::{Task, TaskId};

pub const MOTIVATIONAL_QUOTES: [&str; 7] = [
    "Progress is progress, no matter how small.",
    "You've got this! One task at a time.",
    "Small steps lead to big achievements.",
    "Every task completed is a victory worth celebrating.",
    "Keep going, you're doing great!",
    "Today's efforts shape tomorrow's success.",
    "Focus on progress, not perfection.",
];

/// Chance that a refresh picks a new motivational quote.
pub const QUOTE_REROLL_PROBABILITY: f64 = 0.1;

/// Welcome message chosen once per session from the local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..12 => Greeting::Morning,
            12..17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn now_local() -> Self {
        Self::for_hour(Local::now().hour())
    }

    pub fn message(self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning! Ready to be productive?",
            Greeting::Afternoon => "Good afternoon! Keep the momentum going!",
            Greeting::Evening => "Good evening! Let's wrap up some tasks!",
        }
    }
}

/// The motivational quote currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteRotation {
    index: usize,
}

impl QuoteRotation {
    /// Picks a quote uniformly at random.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            index: rng.gen_range(0..MOTIVATIONAL_QUOTES.len()),
        }
    }

    /// Gives the quote its one-in-ten chance of being re-rolled. Returns
    /// whether a new pick was made (it may land on the same quote).
    pub fn on_refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if rng.gen_bool(QUOTE_REROLL_PROBABILITY) {
            *self = Self::pick(rng);
            true
        } else {
            false
        }
    }

    pub fn text(&self) -> &'static str {
        MOTIVATIONAL_QUOTES[self.index]
    }
}

/// Formats a timestamp like `1/5/2024, 3:07 PM` in the given zone.
pub fn format_timestamp<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M %p")
        .to_string()
}

/// One visible task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    /// Already escaped, safe to inject as markup.
    pub text: String,
    pub completed: bool,
    pub leaving: bool,
    pub toggle_label: &'static str,
    pub time_label: &'static str,
    pub time: String,
}

impl TaskRow {
    fn new<Tz>(task: &Task, leaving: bool, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let (toggle_label, time_label, shown_at) = match task.completed_at() {
            Some(completed_at) if task.is_completed() => ("Undo", "Completed:", completed_at),
            _ => ("Complete", "Created:", task.created_at()),
        };
        Self {
            id: task.id(),
            text: task.text().to_string(),
            completed: task.is_completed(),
            leaving,
            toggle_label,
            time_label,
            time: format_timestamp(shown_at, tz),
        }
    }

    /// CSS classes of the row element.
    pub fn class(&self) -> String {
        let mut class = String::from("task-item");
        if self.completed {
            class.push_str(" completed");
        }
        if self.leaving {
            class.push_str(" removing");
        }
        class
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: Filter,
    pub active: bool,
}

/// Everything the page needs for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub greeting: &'static str,
    pub quote: &'static str,
    pub filters: Vec<FilterControl>,
    pub rows: Vec<TaskRow>,
    pub total: usize,
    pub completed: usize,
    pub progress: f64,
    pub show_empty_state: bool,
}

impl ViewModel {
    pub fn render<Tz>(
        store: &TaskStore,
        filter: Filter,
        greeting: Greeting,
        quote: QuoteRotation,
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let rows: Vec<TaskRow> = store
            .filtered(filter)
            .into_iter()
            .map(|task| TaskRow::new(task, store.is_leaving(task.id()), tz))
            .collect();
        let stats = store.stats();
        Self {
            greeting: greeting.message(),
            quote: quote.text(),
            filters: Filter::ALL
                .iter()
                .map(|&control| FilterControl {
                    filter: control,
                    active: control == filter,
                })
                .collect(),
            show_empty_state: rows.is_empty(),
            rows,
            total: stats.total,
            completed: stats.completed,
            progress: stats.percent(),
        }
    }

    /// CSS width of the progress fill.
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use insta::assert_snapshot;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, hour, minute, 0).unwrap()
    }

    fn quote() -> QuoteRotation {
        QuoteRotation { index: 0 }
    }

    #[test]
    fn can_format_timestamp_with_twelve_hour_clock() {
        assert_snapshot!(format_timestamp(at(15, 7), &Utc), @"1/5/2024, 3:07 PM");
        assert_eq!(format_timestamp(at(0, 30), &Utc), "1/5/2024, 12:30 AM");
    }

    #[test]
    fn can_format_timestamp_in_viewer_zone() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(format_timestamp(at(3, 0), &new_york), "1/4/2024, 10:00 PM");
    }

    #[test]
    fn can_pick_greeting_by_hour() {
        assert_eq!(Greeting::for_hour(0), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(16), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Evening);
        assert_eq!(Greeting::for_hour(23), Greeting::Evening);
    }

    #[test]
    fn can_reroll_quote_about_one_in_ten_refreshes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rotation = QuoteRotation::pick(&mut rng);

        let rerolls = (0..10_000)
            .filter(|_| rotation.on_refresh(&mut rng))
            .count();

        assert!((800..1200).contains(&rerolls), "rerolled {rerolls} times");
        assert!(MOTIVATIONAL_QUOTES.contains(&rotation.text()));
    }

    #[test]
    fn can_render_rows_with_labels() {
        let mut store = TaskStore::new();
        store.add("Buy milk", at(9, 0));
        store.add("Walk dog", at(9, 5));
        let walk = store.tasks()[0].id();
        store.toggle(walk, at(15, 7));

        let view = ViewModel::render(&store, Filter::All, Greeting::Morning, quote(), &Utc);

        assert_eq!(view.rows.len(), 2);
        let done = &view.rows[0];
        assert_eq!(done.text, "Walk dog");
        assert_eq!(done.toggle_label, "Undo");
        assert_eq!(done.time_label, "Completed:");
        assert_eq!(done.time, "1/5/2024, 3:07 PM");
        assert_eq!(done.class(), "task-item completed");

        let open = &view.rows[1];
        assert_eq!(open.toggle_label, "Complete");
        assert_eq!(open.time_label, "Created:");
        assert_eq!(open.time, "1/5/2024, 9:00 AM");
        assert_eq!(open.class(), "task-item");
    }

    #[test]
    fn can_render_stats_from_whole_collection() {
        let mut store = TaskStore::new();
        store.add("a", at(9, 0));
        store.add("b", at(9, 1));
        store.add("c", at(9, 2));
        store.add("d", at(9, 3));
        let id = store.tasks()[3].id();
        store.toggle(id, at(9, 4));

        let view = ViewModel::render(&store, Filter::Completed, Greeting::Morning, quote(), &Utc);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.total, 4);
        assert_eq!(view.completed, 1);
        assert_eq!(view.progress_width(), "25%");
    }

    #[test]
    fn can_show_empty_state_only_for_empty_filtered_list() {
        let mut store = TaskStore::new();
        let empty = ViewModel::render(&store, Filter::All, Greeting::Evening, quote(), &Utc);
        assert!(empty.show_empty_state);
        assert_eq!(empty.progress_width(), "0%");

        store.add("Buy milk", at(9, 0));
        let all = ViewModel::render(&store, Filter::All, Greeting::Evening, quote(), &Utc);
        let completed = ViewModel::render(&store, Filter::Completed, Greeting::Evening, quote(), &Utc);

        assert!(!all.show_empty_state);
        assert!(completed.show_empty_state);
    }

    #[test]
    fn can_mark_active_filter_control() {
        let store = TaskStore::new();

        let view = ViewModel::render(&store, Filter::Active, Greeting::Afternoon, quote(), &Utc);

        let active: Vec<Filter> = view
            .filters
            .iter()
            .filter(|control| control.active)
            .map(|control| control.filter)
            .collect();
        assert_eq!(active, vec![Filter::Active]);
        assert_eq!(view.filters.len(), 3);
        assert_eq!(view.greeting, "Good afternoon! Keep the momentum going!");
        assert_eq!(view.quote, MOTIVATIONAL_QUOTES[0]);
    }

    #[test]
    fn can_flag_leaving_rows() {
        let mut store = TaskStore::new();
        store.add("Buy milk", at(9, 0));
        let id = store.tasks()[0].id();
        store.mark_for_removal(id);

        let view = ViewModel::render(&store, Filter::All, Greeting::Morning, quote(), &Utc);

        assert!(view.rows[0].leaving);
        assert_eq!(view.rows[0].class(), "task-item removing");
    }
}

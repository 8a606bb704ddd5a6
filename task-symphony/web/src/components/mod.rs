mod empty_state;
mod error_message;
mod filter_bar;
mod header;
mod motivation;
mod stats_panel;
mod task_input;
mod task_item;
mod task_list;

pub use empty_state::EmptyState;
pub use error_message::ErrorMessage;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use motivation::Motivation;
pub use stats_panel::StatsPanel;
pub use task_input::TaskInput;
pub use task_item::TaskItem;
pub use task_list::TaskList;

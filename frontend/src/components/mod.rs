pub mod filter_bar;
pub mod forms;
pub mod summary_panel;
pub mod transactions;

pub use filter_bar::FilterBar;
pub use forms::{FormEdit, TransactionForm};
pub use summary_panel::SummaryPanel;
pub use transactions::{DailyChart, TransactionTable};

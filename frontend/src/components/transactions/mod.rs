pub mod daily_chart;
pub mod transaction_table;

pub use daily_chart::DailyChart;
pub use transaction_table::TransactionTable;

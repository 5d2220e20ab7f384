//! Domain logic shared by the PocketPulse front end: the transaction model,
//! form validation, table filtering, the chart series, and the gateway to the
//! finance API. Nothing in here touches the DOM, so it all runs natively in tests.

pub mod config;
pub mod currency;
pub mod demo;
pub mod filter;
pub mod gateway;
pub mod models;
pub mod refresh;
pub mod series;

pub use config::TrackerConfig;
pub use filter::{TransactionQuery, TypeFilter};
pub use gateway::{
    ApiRequest, ApiResponse, FinanceGateway, HttpMethod, HttpTransport, TransportError,
};
pub use models::{
    DeleteAck, DraftError, SubmitOutcome, Summary, Transaction, TransactionDraft, TransactionForm,
    TransactionId, TransactionType,
};
pub use refresh::{RefreshSequencer, RefreshState, RefreshToken, RefreshTrigger};
pub use series::{daily_series, DailySeries, CHART_WINDOW_DAYS};

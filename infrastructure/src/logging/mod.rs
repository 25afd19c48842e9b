//! File-backed exchange logging.

mod exchange_log;

pub use exchange_log::JsonlExchangeLogger;

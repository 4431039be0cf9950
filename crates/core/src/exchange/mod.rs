//! Money exchange through the USD pivot.

pub mod local;
pub mod multi;
pub mod ports;
pub mod service;
pub mod single;


pub use local::LocalCurrencyExchanger;
pub use multi::MultiExchangeService;
pub use ports::{CurrencyExchanger, CurrencyRepository};
pub use service::{CreateCurrencyInput, CurrencyAppService, ExchangeInput};
pub use single::ExchangeService;

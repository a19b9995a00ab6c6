//! In-memory storage for MindMyMoney
//!
//! Records live only for the duration of the process. `Storage` owns the three
//! lists and is handed to commands by `&mut`, one command at a time.

pub mod list;

pub use list::{
    CreditCardList, ExpenditureList, IncomeList, Record, RecordList, LIST_INDEX_CORRECTION,
};

/// Main storage coordinator that owns every record list of the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storage {
    pub expenditures: ExpenditureList,
    pub credit_cards: CreditCardList,
    pub incomes: IncomeList,
}

impl Storage {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all lists
    pub fn record_count(&self) -> usize {
        self.expenditures.len() + self.credit_cards.len() + self.incomes.len()
    }
}

mod budget_item;
mod payment_record;
mod progress_entry;

pub use budget_item::BudgetItem;
pub use payment_record::PaymentRecord;
pub use progress_entry::ProgressEntry;

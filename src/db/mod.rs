pub mod initialize;
pub mod ledger;
pub mod migrate;
pub mod pool;

//! 배출계수 테이블, 레지스트리, 내장 기본값 모음.

pub mod defaults;
pub mod registry;
pub mod table;

pub use defaults::{default_table, DEFAULT_VERSION};
pub use registry::FactorRegistry;
pub use table::{FactorCategory, FactorEntry, FactorKey, FactorTable, FactorTableBuilder, FactorUnit};

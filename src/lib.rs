//! 고체 바이오연료(펠릿/브리켓)의 전과정 탄소집약도(gCO₂e/MJ)와 NEEA 계산 엔진.
//!
//! 계산 로직은 라이브러리로 분리하여 CLI 외의 화면/내보내기에서도 그대로 쓴다.

pub mod aggregate;
pub mod app;
pub mod biomass;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod factors;
pub mod i18n;
pub mod loader;
pub mod phases;
pub mod reference;
pub mod result;
pub mod ui_cli;
pub mod units;
pub mod validation;

pub use engine::{calculate, CalculationRequest, DistributionLeg, Engine};
pub use error::EngineError;
pub use result::{CalculationResult, PhaseResult};

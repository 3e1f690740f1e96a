//! 활동량/배출량 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod mass;

pub use energy::{convert_energy, EnergyUnit};
pub use mass::{convert_mass, kg_to_tonnes, MassUnit};

use std::sync::{Arc, RwLock};

use super::table::{FactorCategory, FactorTable, FactorUnit};
use crate::error::EngineError;

/// 프로세스 전역에서 공유하는 읽기 전용 계수 레지스트리.
///
/// 계산은 [`FactorRegistry::snapshot`]으로 얻은 `Arc<FactorTable>`만 읽는다.
/// 재로드는 새 테이블로 참조만 교체하므로 진행 중인 계산은 이전 테이블을 그대로 본다.
#[derive(Debug)]
pub struct FactorRegistry {
    current: RwLock<Arc<FactorTable>>,
}

impl FactorRegistry {
    pub fn new(table: FactorTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// 현재 계수표를 공유 참조로 반환한다.
    pub fn snapshot(&self) -> Arc<FactorTable> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn current_version(&self) -> String {
        self.snapshot().version().to_string()
    }

    /// 지정한 버전의 계수를 조회한다. 버전이 다르거나 키가 없으면 `MissingFactor`.
    pub fn lookup(
        &self,
        category: FactorCategory,
        unit: FactorUnit,
        version: &str,
    ) -> Result<f64, EngineError> {
        let table = self.snapshot();
        if table.version() != version {
            return Err(EngineError::MissingFactor {
                category,
                unit,
                version: version.to_string(),
            });
        }
        table.lookup(category, unit)
    }

    /// 요청 버전과 일치하는 테이블을 반환한다.
    pub fn table_for(&self, version: &str) -> Result<Arc<FactorTable>, EngineError> {
        let table = self.snapshot();
        if table.version() == version {
            Ok(table)
        } else {
            Err(EngineError::FactorVersionUnavailable {
                requested: version.to_string(),
                current: table.version().to_string(),
            })
        }
    }

    /// 새 테이블로 교체하고 이전 테이블을 돌려준다.
    pub fn reload(&self, table: FactorTable) -> Arc<FactorTable> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, Arc::new(table))
    }
}
